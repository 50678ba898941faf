//! Command enum: every operation the executor can run.
//!
//! Commands are plain data. Transports build them from requests (HTTP
//! bodies, CLI lines) and hand them to [`Executor::execute`](crate::Executor::execute).

use poolstat_core::PoolId;
use serde::{Deserialize, Serialize};

/// An operation against the pool store.
///
/// The percentile of [`Command::PoolQuery`] is carried raw; it is validated
/// by the executor before the store is touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Liveness check.
    Ping,

    /// Store summary.
    Info,

    /// Create a pool or append to it.
    PoolUpdate {
        /// Target pool.
        pool_id: PoolId,
        /// Samples to add, in order.
        values: Vec<f64>,
    },

    /// Compute a percentile of a pool.
    PoolQuery {
        /// Target pool.
        pool_id: PoolId,
        /// Requested percentile, must lie in (0, 100).
        percentile: f64,
    },

    /// Sample count of a pool, `None` if it was never written.
    PoolLen {
        /// Target pool.
        pool_id: PoolId,
    },
}

impl Command {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping => "Ping",
            Command::Info => "Info",
            Command::PoolUpdate { .. } => "PoolUpdate",
            Command::PoolQuery { .. } => "PoolQuery",
            Command::PoolLen { .. } => "PoolLen",
        }
    }

    /// Check if the command mutates the store.
    pub fn is_write(&self) -> bool {
        matches!(self, Command::PoolUpdate { .. })
    }
}
