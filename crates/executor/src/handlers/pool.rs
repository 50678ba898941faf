//! Pool command handlers: update, query, len.

use poolstat_core::{Percentile, PoolId};
use poolstat_engine::PoolStore;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle PoolUpdate command.
pub fn pool_update(store: &PoolStore, pool_id: PoolId, values: Vec<f64>) -> Result<Output> {
    let outcome = convert_result(store.upsert(pool_id, values))?;
    Ok(Output::Upserted(outcome))
}

/// Handle PoolQuery command.
///
/// The percentile is validated here, before the store is consulted, so an
/// out-of-range percentile is reported even for an unknown pool.
pub fn pool_query(store: &PoolStore, pool_id: PoolId, percentile: f64) -> Result<Output> {
    let percentile = convert_result(Percentile::new(percentile))?;
    let result = convert_result(store.query(pool_id, percentile))?;
    Ok(Output::Quantile(result))
}

/// Handle PoolLen command.
pub fn pool_len(store: &PoolStore, pool_id: PoolId) -> Result<Output> {
    Ok(Output::Count(store.len(pool_id)))
}
