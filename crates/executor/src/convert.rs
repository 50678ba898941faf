//! Conversion helpers between store results and executor results.

use crate::{Error, Result};

/// Convert a core result into an executor result.
pub fn convert_result<T>(r: poolstat_core::Result<T>) -> Result<T> {
    r.map_err(Error::from)
}
