use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use poolstat_server::ServerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Serve sample pools and percentile queries over HTTP", version)]
struct Args {
    /// TOML configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Address to bind (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides the config file)
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Maximum samples per pool (overrides the config file)
    #[arg(long = "max-pool-size")]
    max_pool_size: Option<usize>,

    /// Maximum request body size in bytes (overrides the config file)
    #[arg(long = "max-body-bytes")]
    max_body_bytes: Option<usize>,
}

impl Args {
    fn into_config(self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ServerConfig::default(),
        };
        if let Some(host) = self.host {
            config.listen.host = host;
        }
        if let Some(port) = self.port {
            config.listen.port = port;
        }
        if let Some(limit) = self.max_pool_size {
            config.store.max_pool_size = Some(limit);
        }
        if let Some(limit) = self.max_body_bytes {
            config.listen.max_body_bytes = Some(limit);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config()?;
    poolstat_server::run(config).await?;
    Ok(())
}
