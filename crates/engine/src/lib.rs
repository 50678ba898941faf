//! Pool storage engine for poolstat
//!
//! [`PoolStore`] owns every pool in the process. It is created once at
//! startup from a [`StoreConfig`] and handed to request handlers behind an
//! `Arc`.

#![warn(missing_docs)]

pub mod config;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use store::{PoolStore, StoreInfo};
