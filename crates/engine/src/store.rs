//! Sharded in-memory pool store
//!
//! Pools live in a DashMap keyed by [`PoolId`]; every pool sits behind its
//! own `RwLock`.
//!
//! # Design
//!
//! - DashMap: 16-way sharded by default, the shard lock is held only to find
//!   or create a pool's entry
//! - Per-pool RwLock: writes to one pool are serialized, reads copy a
//!   consistent snapshot and release the lock before sorting
//! - Different pools never wait on each other's sample locks
//!
//! # Example
//!
//! ```
//! use poolstat_core::{Percentile, PoolId, UpsertOutcome};
//! use poolstat_engine::PoolStore;
//!
//! let store = PoolStore::new();
//! let id = PoolId::new(1);
//!
//! assert_eq!(store.upsert(id, vec![1.0, 2.0]).unwrap(), UpsertOutcome::Inserted);
//! assert_eq!(store.upsert(id, vec![3.0, 4.0]).unwrap(), UpsertOutcome::Appended);
//!
//! let result = store.query(id, Percentile::new(25.0).unwrap()).unwrap();
//! assert_eq!(result.value, 1.75);
//! assert_eq!(result.total_count, 4);
//! ```

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use poolstat_core::{
    quantile_sorted, sort_samples, Percentile, PoolError, PoolId, QuantileResult, Result,
    UpsertOutcome,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::StoreConfig;

/// Samples of one pool, in insertion order
type PoolCell = Arc<RwLock<Vec<f64>>>;

/// Summary of the store's contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Number of pools ever written
    pub pool_count: usize,
    /// Sum of sample counts over all pools
    pub total_samples: usize,
    /// Configured per-pool limit, if any
    pub max_pool_size: Option<usize>,
}

/// In-memory store of sample pools
///
/// Construct one per process and share it as `Arc<PoolStore>`; all
/// operations take `&self`.
///
/// # Thread Safety
///
/// - `upsert()`: locks the map shard briefly, then the target pool for write
/// - `query()`: locks the target pool for read only while copying samples
/// - Operations on different pools never contend on a pool lock
#[derive(Debug)]
pub struct PoolStore {
    pools: DashMap<PoolId, PoolCell>,
    config: StoreConfig,
}

impl PoolStore {
    /// Create an empty store with the default (unbounded) configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            pools: DashMap::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Get the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ========================================================================
    // Write path
    // ========================================================================

    /// Create a pool from `values`, or append `values` to an existing pool
    ///
    /// An empty `values` is accepted: a new pool is created with no samples,
    /// an existing one is left as it was.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidArgument`] if any value is NaN or infinite
    /// - [`PoolError::CapacityExceeded`] if the pool would outgrow
    ///   `max_pool_size`
    ///
    /// A failed upsert changes nothing.
    pub fn upsert(&self, pool_id: PoolId, values: Vec<f64>) -> Result<UpsertOutcome> {
        validate_samples(&values)?;
        let incoming = values.len();

        let pool = match self.pools.entry(pool_id) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                self.check_capacity(pool_id, 0, incoming)?;
                entry.insert(Arc::new(RwLock::new(values)));
                debug!(pool_id = %pool_id, count = incoming, "pool inserted");
                return Ok(UpsertOutcome::Inserted);
            }
        };

        let mut samples = pool.write();
        self.check_capacity(pool_id, samples.len(), incoming)?;
        samples.extend_from_slice(&values);
        debug!(
            pool_id = %pool_id,
            added = incoming,
            total = samples.len(),
            "pool appended"
        );
        Ok(UpsertOutcome::Appended)
    }

    fn check_capacity(&self, pool_id: PoolId, existing: usize, incoming: usize) -> Result<()> {
        let Some(limit) = self.config.max_pool_size else {
            return Ok(());
        };
        let requested = existing.saturating_add(incoming);
        if requested > limit {
            warn!(pool_id = %pool_id, limit, requested, "pool capacity exceeded");
            return Err(PoolError::CapacityExceeded {
                pool_id,
                limit,
                requested,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Read path
    // ========================================================================

    /// Compute the `percentile` quantile of a pool
    ///
    /// Sorts a snapshot of the pool; the stored order is untouched.
    ///
    /// # Errors
    ///
    /// - [`PoolError::NotFound`] if the pool was never written
    /// - [`PoolError::EmptyPool`] if the pool holds no samples
    pub fn query(&self, pool_id: PoolId, percentile: Percentile) -> Result<QuantileResult> {
        let mut snapshot = self
            .samples(pool_id)
            .ok_or(PoolError::NotFound { pool_id })?;
        if snapshot.is_empty() {
            return Err(PoolError::EmptyPool { pool_id });
        }

        let total_count = snapshot.len();
        sort_samples(&mut snapshot);
        let value = quantile_sorted(&snapshot, percentile)?;
        debug!(pool_id = %pool_id, %percentile, value, total_count, "pool queried");

        Ok(QuantileResult { value, total_count })
    }

    /// Copy of a pool's samples in insertion order
    pub fn samples(&self, pool_id: PoolId) -> Option<Vec<f64>> {
        let pool = self.pool(pool_id)?;
        let samples = pool.read().clone();
        Some(samples)
    }

    /// Number of samples in a pool
    pub fn len(&self, pool_id: PoolId) -> Option<usize> {
        let pool = self.pool(pool_id)?;
        let len = pool.read().len();
        Some(len)
    }

    /// Check if a pool has been written
    pub fn contains(&self, pool_id: PoolId) -> bool {
        self.pools.contains_key(&pool_id)
    }

    /// Number of pools
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Check if no pool has been written yet
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Total number of samples across all pools
    pub fn total_samples(&self) -> usize {
        self.pools.iter().map(|entry| entry.value().read().len()).sum()
    }

    /// Summary of the store's contents
    pub fn info(&self) -> StoreInfo {
        StoreInfo {
            pool_count: self.pool_count(),
            total_samples: self.total_samples(),
            max_pool_size: self.config.max_pool_size,
        }
    }

    fn pool(&self, pool_id: PoolId) -> Option<PoolCell> {
        self.pools.get(&pool_id).map(|entry| Arc::clone(entry.value()))
    }
}

impl Default for PoolStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_samples(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(PoolError::InvalidArgument {
            reason: format!("sample at index {} is not finite: {}", index, values[index]),
        }),
        None => Ok(()),
    }
}
