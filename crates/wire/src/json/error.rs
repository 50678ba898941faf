//! Wire error encoding for poolstat errors
//!
//! This module provides JSON encoding for errors, matching the wire format:
//! ```json
//! {
//!   "code": "NotFound",
//!   "message": "pool 7 not found",
//!   "details": {"poolId": 7}
//! }
//! ```
//!
//! ## Error Codes
//!
//! | Code | Description |
//! |------|-------------|
//! | NotFound | Pool was never written |
//! | EmptyPool | Pool holds no samples |
//! | InvalidArgument | Percentile or samples out of domain |
//! | CapacityExceeded | Pool size limit reached |
//! | InvalidRequest | Body could not be decoded |
//! | Internal | Bug or invariant violation |

use poolstat_executor::Error;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::decode::DecodeError;

/// Wire error representation for JSON encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireError {
    /// The canonical error code (e.g., "NotFound", "EmptyPool")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Structured details, `null` when there are none
    pub details: Option<Value>,
}

impl WireError {
    /// Create a new wire error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a wire error with details
    pub fn with_details(code: impl Into<String>, message: impl Into<String>, details: Value) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl From<&Error> for WireError {
    fn from(error: &Error) -> Self {
        let details = match error {
            Error::NotFound { pool_id } | Error::EmptyPool { pool_id } => {
                Some(json!({ "poolId": pool_id }))
            }
            Error::InvalidArgument { reason } => Some(json!({ "reason": reason })),
            Error::CapacityExceeded {
                pool_id,
                limit,
                requested,
            } => Some(json!({
                "poolId": pool_id,
                "limit": limit,
                "requested": requested,
            })),
            Error::Internal { .. } => None,
        };

        match details {
            Some(details) => WireError::with_details(error.code(), error.to_string(), details),
            None => WireError::new(error.code(), error.to_string()),
        }
    }
}

impl From<&DecodeError> for WireError {
    fn from(error: &DecodeError) -> Self {
        WireError::new("InvalidRequest", error.to_string())
    }
}

/// Encode an executor error to JSON wire format
pub fn encode_error(error: &Error) -> String {
    let wire = WireError::from(error);
    serde_json::to_string(&wire).unwrap_or_else(|_| {
        format!(r#"{{"code":"{}","message":"","details":null}}"#, wire.code)
    })
}
