//! Request decoding
//!
//! Bodies are parsed with serde_json; failures are split into syntax errors
//! (not JSON at all) and schema errors (JSON, but not the expected shape).

use serde::de::DeserializeOwned;
use serde_json::error::Category;
use thiserror::Error;

use super::request::{QueryRequest, UpdateRequest};

/// Decode error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Body is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Body is JSON but fields are missing or of the wrong type
    #[error("Invalid request: {0}")]
    InvalidShape(String),

    /// Body is empty or truncated
    #[error("Unexpected end of input")]
    UnexpectedEnd,
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            Category::Eof => DecodeError::UnexpectedEnd,
            Category::Data => DecodeError::InvalidShape(e.to_string()),
            Category::Syntax | Category::Io => DecodeError::InvalidJson(e.to_string()),
        }
    }
}

fn decode<T: DeserializeOwned>(json: &str) -> Result<T, DecodeError> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::UnexpectedEnd);
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Decode an update request body
pub fn decode_update_request(json: &str) -> Result<UpdateRequest, DecodeError> {
    decode(json)
}

/// Decode a query request body
pub fn decode_query_request(json: &str) -> Result<QueryRequest, DecodeError> {
    decode(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use poolstat_core::PoolId;

    #[test]
    fn test_decode_update() {
        let req = decode_update_request(r#"{"poolId": 12, "poolValues": [1, 2.5, -3]}"#).unwrap();
        assert_eq!(req.pool_id, PoolId::new(12));
        assert_eq!(req.pool_values, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn test_decode_update_empty_values() {
        let req = decode_update_request(r#"{"poolId": 1, "poolValues": []}"#).unwrap();
        assert!(req.pool_values.is_empty());
    }

    #[test]
    fn test_decode_query() {
        let req = decode_query_request(r#"{"poolId": 3, "percentile": 99.5}"#).unwrap();
        assert_eq!(req.pool_id, PoolId::new(3));
        assert_eq!(req.percentile, 99.5);
    }

    #[test]
    fn test_out_of_range_percentile_still_decodes() {
        // range check belongs to the executor
        let req = decode_query_request(r#"{"poolId": 3, "percentile": 150}"#).unwrap();
        assert_eq!(req.percentile, 150.0);
    }

    #[test]
    fn test_snake_case_fields_rejected() {
        let err = decode_update_request(r#"{"pool_id": 1, "pool_values": []}"#).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidShape(_)));
    }

    #[test]
    fn test_missing_field() {
        let err = decode_query_request(r#"{"poolId": 1}"#).unwrap_err();
        match err {
            DecodeError::InvalidShape(msg) => assert!(msg.contains("percentile")),
            other => panic!("expected InvalidShape, got {:?}", other),
        }
    }

    #[test]
    fn test_integral_float_pool_id_accepted() {
        let req = decode_query_request(r#"{"poolId": 4.0, "percentile": 50}"#).unwrap();
        assert_eq!(req.pool_id, PoolId::new(4));
    }

    #[test]
    fn test_fractional_pool_id_rejected() {
        let err = decode_query_request(r#"{"poolId": 1.5, "percentile": 50}"#).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidShape(_)));
    }

    #[test]
    fn test_syntax_error() {
        let err = decode_update_request(r#"{"poolId": 1, "poolValues": [1,,2]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidJson(_)));
    }

    #[test]
    fn test_empty_and_truncated_bodies() {
        assert_eq!(decode_update_request("   ").unwrap_err(), DecodeError::UnexpectedEnd);
        assert_eq!(
            decode_update_request(r#"{"poolId": 1"#).unwrap_err(),
            DecodeError::UnexpectedEnd
        );
    }
}
