//! Command execution layer for poolstat.
//!
//! Transports translate their requests into [`Command`]s and hand them to an
//! [`Executor`], which validates input, runs the operation against the
//! [`PoolStore`](poolstat_engine::PoolStore) and returns an [`Output`] or an
//! [`Error`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use poolstat_core::PoolId;
//! use poolstat_engine::PoolStore;
//! use poolstat_executor::{Command, Executor, Output};
//!
//! let executor = Executor::new(Arc::new(PoolStore::new()));
//!
//! executor.execute(Command::PoolUpdate {
//!     pool_id: PoolId::new(1),
//!     values: vec![1.0, 2.0, 3.0, 4.0, 5.0],
//! }).unwrap();
//!
//! match executor.execute(Command::PoolQuery { pool_id: PoolId::new(1), percentile: 50.0 }).unwrap() {
//!     Output::Quantile(q) => assert_eq!(q.value, 3.0),
//!     other => panic!("unexpected output: {:?}", other),
//! }
//! ```

#![warn(missing_docs)]

mod command;
mod convert;
mod error;
mod executor;
mod handlers;
mod output;


pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;

// Re-exported so transports need only this crate for the common types.
pub use poolstat_core::{Percentile, PoolId, QuantileResult, UpsertOutcome};
pub use poolstat_engine::{PoolStore, StoreConfig, StoreInfo};
