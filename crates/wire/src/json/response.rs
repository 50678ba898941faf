//! Response bodies

use poolstat_core::UpsertOutcome;
use poolstat_executor::{Output, StoreInfo};
use serde::{Deserialize, Serialize};

/// Body of a successful update
///
/// ```json
/// {"status": "appended"}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResponse {
    /// Whether the pool was created or extended
    pub status: UpsertOutcome,
}

/// Body of a successful query
///
/// ```json
/// {"calculatedQuantile": 1.75, "totalCount": 4}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    /// Interpolated quantile
    pub calculated_quantile: f64,
    /// Samples in the pool at query time
    pub total_count: usize,
}

/// Store summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    /// Number of pools
    pub pool_count: usize,
    /// Samples across all pools
    pub total_samples: usize,
    /// Per-pool limit, `null` when unbounded
    pub max_pool_size: Option<usize>,
}

impl From<StoreInfo> for InfoResponse {
    fn from(info: StoreInfo) -> Self {
        Self {
            pool_count: info.pool_count,
            total_samples: info.total_samples,
            max_pool_size: info.max_pool_size,
        }
    }
}

/// Reply to a ping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PongResponse {
    /// Server version
    pub version: String,
}

/// Sample count of a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    /// `null` when the pool was never written
    pub count: Option<usize>,
}

/// Service description returned by the root and health endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutResponse {
    /// Service name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Service version
    pub version: String,
}

/// Any successful response body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// Update reply
    Update(UpdateResponse),
    /// Query reply
    Query(QueryResponse),
    /// Info reply
    Info(InfoResponse),
    /// Ping reply
    Pong(PongResponse),
    /// Length reply
    Count(CountResponse),
}

impl From<Output> for Response {
    fn from(output: Output) -> Self {
        match output {
            Output::Upserted(status) => Response::Update(UpdateResponse { status }),
            Output::Quantile(q) => Response::Query(QueryResponse {
                calculated_quantile: q.value,
                total_count: q.total_count,
            }),
            Output::Info(info) => Response::Info(info.into()),
            Output::Pong { version } => Response::Pong(PongResponse { version }),
            Output::Count(count) => Response::Count(CountResponse { count }),
        }
    }
}

/// Encode a response body to JSON
pub fn encode_response(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| "null".to_string())
}
