//! The executor: single entry point that runs [`Command`]s.

use std::sync::Arc;

use poolstat_engine::PoolStore;
use tracing::debug;

use crate::handlers;
use crate::{Command, Output, Result};

/// Runs commands against a shared [`PoolStore`].
///
/// `Executor` is cheap to clone; clones share the same store. Every
/// transport (HTTP handlers, CLI session, the Rust facade) goes through
/// [`execute`](Executor::execute), so validation and error mapping happen
/// in one place.
#[derive(Debug, Clone)]
pub struct Executor {
    store: Arc<PoolStore>,
}

impl Executor {
    /// Create an executor over the given store.
    pub fn new(store: Arc<PoolStore>) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &Arc<PoolStore> {
        &self.store
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(command = cmd.name(), "executing command");

        let result = match cmd {
            Command::Ping => handlers::db::ping(),
            Command::Info => handlers::db::info(&self.store),
            Command::PoolUpdate { pool_id, values } => {
                handlers::pool::pool_update(&self.store, pool_id, values)
            }
            Command::PoolQuery {
                pool_id,
                percentile,
            } => handlers::pool::pool_query(&self.store, pool_id, percentile),
            Command::PoolLen { pool_id } => handlers::pool::pool_len(&self.store, pool_id),
        };

        if let Err(e) = &result {
            debug!(code = e.code(), error = %e, "command failed");
        }
        result
    }

    /// Execute commands in order, collecting every result.
    ///
    /// A failing command does not stop the ones after it.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}
