//! Request bodies

use poolstat_core::PoolId;
use poolstat_executor::Command;
use serde::{Deserialize, Serialize};

/// Body of an update request
///
/// ```json
/// {"poolId": 1, "poolValues": [1.0, 2.0, 3.0]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    /// Target pool
    pub pool_id: PoolId,
    /// Samples to insert or append
    pub pool_values: Vec<f64>,
}

/// Body of a query request
///
/// ```json
/// {"poolId": 1, "percentile": 95}
/// ```
///
/// The percentile is decoded as any number; the (0, 100) bound is checked by
/// the executor so that it is reported as an invalid argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// Target pool
    pub pool_id: PoolId,
    /// Requested percentile
    pub percentile: f64,
}

impl From<UpdateRequest> for Command {
    fn from(req: UpdateRequest) -> Self {
        Command::PoolUpdate {
            pool_id: req.pool_id,
            values: req.pool_values,
        }
    }
}

impl From<QueryRequest> for Command {
    fn from(req: QueryRequest) -> Self {
        Command::PoolQuery {
            pool_id: req.pool_id,
            percentile: req.percentile,
        }
    }
}
