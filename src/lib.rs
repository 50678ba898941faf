//! # poolstat
//!
//! In-memory sample pools with exact percentile queries.
//!
//! Samples are grouped into pools keyed by an integer id. A pool is created
//! on its first update and grows by appending on later ones. Queries return
//! the linear-interpolation ("R-7") quantile of everything in the pool.
//!
//! ## Quick Start
//!
//! ```
//! use poolstat::prelude::*;
//!
//! let db = Poolstat::new();
//! db.update(1, vec![5.0, 3.0, 1.0, 4.0, 2.0])?;
//!
//! let median = db.query(1, 50.0)?;
//! assert_eq!(median.value, 3.0);
//! assert_eq!(median.total_count, 5);
//!
//! assert!(db.query(2, 50.0).unwrap_err().is_not_found());
//! # Ok::<(), poolstat::Error>(())
//! ```
//!
//! The HTTP server and the shell live in the `poolstat-server` and
//! `poolstat-cli` crates.

#![warn(missing_docs)]

mod database;
mod error;

pub mod prelude;

// Re-export main entry points
pub use database::{Poolstat, PoolstatBuilder};
pub use error::{Error, Result};

// Re-export lower layers for callers that need them
pub use poolstat_core::{quantile, Percentile, PoolId, QuantileResult, UpsertOutcome};
pub use poolstat_engine::{PoolStore, StoreConfig, StoreInfo};
pub use poolstat_executor::{Command, Executor, Output};
