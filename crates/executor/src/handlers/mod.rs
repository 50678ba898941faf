//! Command handlers, one module per command family.

pub mod db;
pub mod pool;
