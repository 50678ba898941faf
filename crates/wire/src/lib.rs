//! Wire encoding for poolstat
//!
//! This crate implements the JSON bodies exchanged with clients:
//!
//! | Operation | Request | Response |
//! |-----------|---------|----------|
//! | update | `{"poolId": 1, "poolValues": [1.0, 2.0]}` | `{"status": "inserted"}` |
//! | query | `{"poolId": 1, "percentile": 50}` | `{"calculatedQuantile": 1.5, "totalCount": 2}` |
//!
//! Errors are encoded as:
//!
//! ```json
//! {"code": "NotFound", "message": "pool 1 not found", "details": {"poolId": 1}}
//! ```
//!
//! ## Examples
//!
//! ```
//! use poolstat_wire::{decode_update_request, encode_response, Response};
//! use poolstat_executor::{Command, Output, UpsertOutcome};
//!
//! let request = decode_update_request(r#"{"poolId": 1, "poolValues": [2.5]}"#).unwrap();
//! let command = Command::from(request);
//! assert!(command.is_write());
//!
//! let json = encode_response(&Response::from(Output::Upserted(UpsertOutcome::Inserted)));
//! assert_eq!(json, r#"{"status":"inserted"}"#);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    decode_query_request, decode_update_request, encode_error, encode_response, AboutResponse,
    CountResponse, DecodeError, InfoResponse, PongResponse, QueryRequest, QueryResponse, Response,
    UpdateRequest, UpdateResponse, WireError,
};
