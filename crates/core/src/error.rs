//! Error types for pool and quantile operations
//!
//! Every failure here is a deterministic function of the store's state and
//! the caller's input. None of them are retryable and none leave partial
//! side effects behind.

use thiserror::Error;

use crate::types::PoolId;

/// Errors raised by the pool store and the quantile algorithm
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoolError {
    /// The pool key has never been written
    #[error("pool {pool_id} not found")]
    NotFound {
        /// The unknown pool
        pool_id: PoolId,
    },

    /// The pool exists but holds no samples
    #[error("pool {pool_id} is empty, cannot compute a quantile")]
    EmptyPool {
        /// The empty pool
        pool_id: PoolId,
    },

    /// Caller input outside the accepted domain
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input
        reason: String,
    },

    /// An upsert would grow a pool past the configured limit
    #[error("pool {pool_id} capacity exceeded: {requested} > {limit}")]
    CapacityExceeded {
        /// The pool being written
        pool_id: PoolId,
        /// Configured maximum number of samples
        limit: usize,
        /// Size the pool would have had after the write
        requested: usize,
    },
}

/// Result type for pool operations
pub type Result<T> = std::result::Result<T, PoolError>;

impl PoolError {
    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, PoolError::NotFound { .. })
    }

    pub(crate) fn empty_input() -> Self {
        PoolError::InvalidArgument {
            reason: "cannot compute a quantile over an empty sequence".to_string(),
        }
    }
}
