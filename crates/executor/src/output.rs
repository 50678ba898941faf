//! Output enum: the successful result of a [`Command`](crate::Command).

use poolstat_core::{QuantileResult, UpsertOutcome};
use poolstat_engine::StoreInfo;
use serde::{Deserialize, Serialize};

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "output", content = "data", rename_all = "snake_case")]
pub enum Output {
    /// Reply to `Ping`.
    Pong {
        /// Crate version serving the request.
        version: String,
    },

    /// Reply to `Info`.
    Info(StoreInfo),

    /// Reply to `PoolUpdate`.
    Upserted(UpsertOutcome),

    /// Reply to `PoolQuery`.
    Quantile(QuantileResult),

    /// Reply to `PoolLen`.
    Count(Option<usize>),
}
