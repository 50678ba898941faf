//! Convenient imports for poolstat.
//!
//! ```
//! use poolstat::prelude::*;
//!
//! let db = Poolstat::new();
//! assert_eq!(db.update(7, vec![0.5])?, UpsertOutcome::Inserted);
//! # Ok::<(), Error>(())
//! ```

// Main entry point
pub use crate::database::{Poolstat, PoolstatBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use poolstat_core::{Percentile, PoolId, QuantileResult, UpsertOutcome};
pub use poolstat_engine::{StoreConfig, StoreInfo};
