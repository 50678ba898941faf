//! JSON wire encoding for poolstat
//!
//! Field names on the wire are camelCase; Rust names stay snake_case and are
//! renamed by serde.

mod decode;
mod error;
mod request;
mod response;

pub use decode::{decode_query_request, decode_update_request, DecodeError};
pub use error::{encode_error, WireError};
pub use request::{QueryRequest, UpdateRequest};
pub use response::{
    encode_response, AboutResponse, CountResponse, InfoResponse, PongResponse, QueryResponse,
    Response, UpdateResponse,
};
