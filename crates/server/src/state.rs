use std::sync::Arc;

use poolstat_engine::{PoolStore, StoreConfig};
use poolstat_executor::{Command, Error, Executor, Output};

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    executor: Executor,
    body_limit: Option<usize>,
}

impl AppState {
    /// Create state around a fresh store
    pub fn new(config: StoreConfig) -> Self {
        Self::from_store(Arc::new(PoolStore::with_config(config)))
    }

    /// Create state around an existing store
    pub fn from_store(store: Arc<PoolStore>) -> Self {
        Self {
            executor: Executor::new(store),
            body_limit: None,
        }
    }

    /// Cap request bodies at `limit` bytes; `None` accepts any size
    pub fn with_body_limit(mut self, limit: Option<usize>) -> Self {
        self.body_limit = limit;
        self
    }

    /// Configured request body cap
    pub fn body_limit(&self) -> Option<usize> {
        self.body_limit
    }

    /// Get the executor
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Execute a command off the async runtime
    ///
    /// Queries sort a copy of the pool, which is O(n log n) in the pool size.
    pub async fn execute(&self, cmd: Command) -> Result<Output, Error> {
        let executor = self.executor.clone();
        tokio::task::spawn_blocking(move || executor.execute(cmd))
            .await
            .map_err(|e| Error::Internal {
                reason: format!("command task failed: {}", e),
            })?
    }
}
