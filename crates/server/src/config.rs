use std::path::Path;

use poolstat_engine::{ConfigError, StoreConfig};
use serde::{Deserialize, Serialize};

/// Full server configuration
///
/// ```toml
/// [listen]
/// host = "0.0.0.0"
/// port = 8000
/// max_body_bytes = 16777216
///
/// [store]
/// max_pool_size = 1000000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Listening socket
    pub listen: ListenConfig,
    /// Pool store settings
    pub store: StoreConfig,
}

/// Listening socket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body; `None` accepts any size
    pub max_body_bytes: Option<usize>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_body_bytes: None,
        }
    }
}

impl ListenConfig {
    /// `host:port` string for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ServerConfig {
    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
