//! Unified error type for poolstat.
//!
//! Wraps executor and store errors behind one stable enum.

use poolstat_core::{PoolError, PoolId};
use poolstat_engine::ConfigError;
use thiserror::Error;

/// All poolstat errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Pool has never been written
    #[error("pool {pool_id} not found")]
    NotFound {
        /// The unknown pool
        pool_id: PoolId,
    },

    /// Pool exists but holds no samples
    #[error("pool {pool_id} is empty")]
    EmptyPool {
        /// The empty pool
        pool_id: PoolId,
    },

    /// Percentile or samples outside the accepted domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Write would grow a pool past the configured limit
    #[error("pool {pool_id} capacity exceeded: {requested} > {limit}")]
    CapacityExceeded {
        /// The pool being written
        pool_id: PoolId,
        /// Configured limit
        limit: usize,
        /// Size the pool would have reached
        requested: usize,
    },

    /// Configuration file could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for poolstat operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if the caller can fix this error by changing its input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Error::Internal(_) | Error::Config(_))
    }
}

impl From<poolstat_executor::Error> for Error {
    fn from(e: poolstat_executor::Error) -> Self {
        use poolstat_executor::Error as ExecError;
        match e {
            ExecError::NotFound { pool_id } => Error::NotFound { pool_id },
            ExecError::EmptyPool { pool_id } => Error::EmptyPool { pool_id },
            ExecError::InvalidArgument { reason } => Error::InvalidArgument(reason),
            ExecError::CapacityExceeded {
                pool_id,
                limit,
                requested,
            } => Error::CapacityExceeded {
                pool_id,
                limit,
                requested,
            },
            ExecError::Internal { reason } => Error::Internal(reason),
        }
    }
}

impl From<PoolError> for Error {
    fn from(e: PoolError) -> Self {
        poolstat_executor::Error::from(e).into()
    }
}
