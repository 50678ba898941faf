//! Executor integration tests
//!
//! Drive the public command surface end to end through the root crate.

mod command_dispatch;
mod common;
mod pool_invariants;
mod poolstat_api;
