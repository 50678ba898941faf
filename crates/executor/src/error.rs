//! Executor error type.
//!
//! Errors carry enough structure for every transport to render them: a
//! stable [`code`](Error::code), a human message via `Display`, and the
//! named fields of each variant.

use poolstat_core::{PoolError, PoolId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// All errors returned by the executor.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "PascalCase")]
pub enum Error {
    /// Pool has never been written.
    #[error("pool {pool_id} not found")]
    NotFound {
        /// The unknown pool.
        pool_id: PoolId,
    },

    /// Pool exists but holds no samples.
    #[error("pool {pool_id} is empty, cannot compute a quantile")]
    EmptyPool {
        /// The empty pool.
        pool_id: PoolId,
    },

    /// Percentile or samples outside the accepted domain.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong.
        reason: String,
    },

    /// Write would grow a pool past the configured limit.
    #[error("pool {pool_id} capacity exceeded: {requested} > {limit}")]
    CapacityExceeded {
        /// The pool being written.
        pool_id: PoolId,
        /// Configured limit.
        limit: usize,
        /// Size the pool would have reached.
        requested: usize,
    },

    /// Bug or invariant violation.
    #[error("internal error: {reason}")]
    Internal {
        /// Description of the failure.
        reason: String,
    },
}

impl Error {
    /// Canonical error code, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "NotFound",
            Error::EmptyPool { .. } => "EmptyPool",
            Error::InvalidArgument { .. } => "InvalidArgument",
            Error::CapacityExceeded { .. } => "CapacityExceeded",
            Error::Internal { .. } => "Internal",
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if the caller's request caused the error.
    ///
    /// Everything except `Internal` is a client error.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Error::Internal { .. })
    }
}

impl From<PoolError> for Error {
    fn from(e: PoolError) -> Self {
        match e {
            PoolError::NotFound { pool_id } => Error::NotFound { pool_id },
            PoolError::EmptyPool { pool_id } => Error::EmptyPool { pool_id },
            PoolError::InvalidArgument { reason } => Error::InvalidArgument { reason },
            PoolError::CapacityExceeded {
                pool_id,
                limit,
                requested,
            } => Error::CapacityExceeded {
                pool_id,
                limit,
                requested,
            },
        }
    }
}

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;
