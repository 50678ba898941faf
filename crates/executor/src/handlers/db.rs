//! Database-level command handlers: ping, info.

use poolstat_engine::PoolStore;

use crate::{Output, Result};

/// Handle Ping command.
pub fn ping() -> Result<Output> {
    Ok(Output::Pong {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle Info command.
pub fn info(store: &PoolStore) -> Result<Output> {
    Ok(Output::Info(store.info()))
}
