//! Shared helpers for executor integration tests.

use std::sync::Arc;

use poolstat::{Command, Executor, Output, PoolId, PoolStore, StoreConfig};

/// Executor over a fresh, unbounded store.
pub fn create_executor() -> Executor {
    Executor::new(Arc::new(PoolStore::new()))
}

/// Executor whose pools hold at most `limit` samples.
pub fn create_bounded_executor(limit: usize) -> Executor {
    Executor::new(Arc::new(PoolStore::with_config(
        StoreConfig::new().max_pool_size(limit),
    )))
}

/// Upsert and unwrap.
pub fn update(executor: &Executor, id: i64, values: &[f64]) -> Output {
    executor
        .execute(Command::PoolUpdate {
            pool_id: PoolId::new(id),
            values: values.to_vec(),
        })
        .unwrap()
}

/// Query and return the quantile value.
pub fn query_value(executor: &Executor, id: i64, percentile: f64) -> f64 {
    match executor
        .execute(Command::PoolQuery {
            pool_id: PoolId::new(id),
            percentile,
        })
        .unwrap()
    {
        Output::Quantile(q) => q.value,
        other => panic!("Expected Quantile output, got {:?}", other),
    }
}
