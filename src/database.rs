//! Main entry point for poolstat.
//!
//! This module provides the `Poolstat` struct, the embedded API over a pool
//! store.

use std::path::Path;
use std::sync::Arc;

use poolstat_core::{PoolId, QuantileResult, UpsertOutcome};
use poolstat_engine::{PoolStore, StoreConfig, StoreInfo};
use poolstat_executor::{Command, Executor, Output};

use crate::error::{Error, Result};

/// An in-memory pool store.
///
/// Create one with [`Poolstat::new`] or [`Poolstat::builder`]. Clones share
/// the same pools.
///
/// # Example
///
/// ```
/// use poolstat::prelude::*;
///
/// let db = Poolstat::new();
/// db.update(1, vec![1.0, 2.0])?;
/// db.update(1, vec![3.0, 4.0])?;
///
/// let q = db.query(1, 25.0)?;
/// assert_eq!(q.value, 1.75);
/// assert_eq!(q.total_count, 4);
/// # Ok::<(), poolstat::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Poolstat {
    executor: Executor,
}

impl Poolstat {
    /// Create a store with unbounded pools.
    pub fn new() -> Self {
        Self::from_config(StoreConfig::default())
    }

    /// Create a builder for store configuration.
    ///
    /// # Example
    ///
    /// ```
    /// let db = poolstat::Poolstat::builder().max_pool_size(1000).open()?;
    /// assert_eq!(db.info()?.max_pool_size, Some(1000));
    /// # Ok::<(), poolstat::Error>(())
    /// ```
    pub fn builder() -> PoolstatBuilder {
        PoolstatBuilder::new()
    }

    fn from_config(config: StoreConfig) -> Self {
        let store = Arc::new(PoolStore::with_config(config));
        Self {
            executor: Executor::new(store),
        }
    }

    /// Insert a pool or append samples to an existing one.
    pub fn update(&self, pool_id: impl Into<PoolId>, values: Vec<f64>) -> Result<UpsertOutcome> {
        match self.execute(Command::PoolUpdate {
            pool_id: pool_id.into(),
            values,
        })? {
            Output::Upserted(outcome) => Ok(outcome),
            other => Err(unexpected("PoolUpdate", &other)),
        }
    }

    /// Compute a percentile (strictly between 0 and 100) of a pool.
    pub fn query(&self, pool_id: impl Into<PoolId>, percentile: f64) -> Result<QuantileResult> {
        match self.execute(Command::PoolQuery {
            pool_id: pool_id.into(),
            percentile,
        })? {
            Output::Quantile(result) => Ok(result),
            other => Err(unexpected("PoolQuery", &other)),
        }
    }

    /// Number of samples in a pool, `None` if it was never written.
    pub fn len(&self, pool_id: impl Into<PoolId>) -> Result<Option<usize>> {
        match self.execute(Command::PoolLen {
            pool_id: pool_id.into(),
        })? {
            Output::Count(count) => Ok(count),
            other => Err(unexpected("PoolLen", &other)),
        }
    }

    /// Summary of the store.
    pub fn info(&self) -> Result<StoreInfo> {
        match self.execute(Command::Info)? {
            Output::Info(info) => Ok(info),
            other => Err(unexpected("Info", &other)),
        }
    }

    /// Check the store is alive, returning the crate version.
    pub fn ping(&self) -> Result<String> {
        match self.execute(Command::Ping)? {
            Output::Pong { version } => Ok(version),
            other => Err(unexpected("Ping", &other)),
        }
    }

    /// Run a raw command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        self.executor.execute(cmd).map_err(Error::from)
    }

    /// Get the executor, for transports that dispatch commands themselves.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Get the underlying store.
    pub fn store(&self) -> &Arc<PoolStore> {
        self.executor.store()
    }
}

impl Default for Poolstat {
    fn default() -> Self {
        Self::new()
    }
}

fn unexpected(command: &str, output: &Output) -> Error {
    Error::Internal(format!("unexpected output for {}: {:?}", command, output))
}

/// Builder for store configuration.
///
/// # Example
///
/// ```ignore
/// let db = Poolstat::builder()
///     .config_file("poolstat.toml")?
///     .initial_capacity(1024)
///     .open()?;
/// ```
#[derive(Debug, Default)]
pub struct PoolstatBuilder {
    config: StoreConfig,
}

impl PoolstatBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit every pool to `limit` samples.
    pub fn max_pool_size(mut self, limit: usize) -> Self {
        self.config = self.config.max_pool_size(limit);
        self
    }

    /// Pre-allocate room for `capacity` pools.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.initial_capacity(capacity);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a TOML file.
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.config = StoreConfig::load(path)?;
        Ok(self)
    }

    /// Open the store.
    pub fn open(self) -> Result<Poolstat> {
        Ok(Poolstat::from_config(self.config))
    }
}
