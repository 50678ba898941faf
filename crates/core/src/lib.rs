//! Core types for poolstat
//!
//! This crate holds the pieces every other layer agrees on:
//! - [`PoolId`]: integer key identifying a pool
//! - [`Percentile`]: a validated percentile in the open interval (0, 100)
//! - [`UpsertOutcome`] and [`QuantileResult`]: operation results
//! - [`quantile`]: the linear-interpolation (R-7) quantile algorithm
//! - [`PoolError`]: the error vocabulary shared by store and algorithm

#![warn(missing_docs)]

pub mod error;
pub mod quantile;
pub mod types;

pub use error::{PoolError, Result};
pub use quantile::{quantile, quantile_sorted, sort_samples};
pub use types::{Percentile, PoolId, QuantileResult, UpsertOutcome};
