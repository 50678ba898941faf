//! Store configuration
//!
//! Settings can be built in code or read from TOML:
//!
//! ```toml
//! max_pool_size = 100000
//! initial_capacity = 64
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a [`PoolStore`](crate::PoolStore)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Maximum number of samples a single pool may hold
    ///
    /// `None` leaves pools unbounded.
    pub max_pool_size: Option<usize>,

    /// Number of pools to pre-allocate room for
    pub initial_capacity: usize,
}

impl StoreConfig {
    /// Create the default configuration (unbounded pools)
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit every pool to `limit` samples
    pub fn max_pool_size(mut self, limit: usize) -> Self {
        self.max_pool_size = Some(limit);
        self
    }

    /// Pre-allocate room for `capacity` pools
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
