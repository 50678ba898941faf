//! Exact quantiles by linear interpolation between order statistics
//!
//! This is the "R-7" estimator (the default of NumPy and R):
//!
//! ```text
//! rank = (p / 100) * (n - 1)
//! q    = sorted[floor(rank)] + (rank - floor(rank)) * (sorted[ceil(rank)] - sorted[floor(rank)])
//! ```
//!
//! When `rank` is integral the result is exactly `sorted[rank]`.
//! Sorting dominates: O(n log n) per call. Nothing is cached between calls.

use std::cmp::Ordering;

use crate::error::{PoolError, Result};
use crate::types::Percentile;

/// Sort samples ascending under the IEEE total order
pub fn sort_samples(samples: &mut [f64]) {
    samples.sort_unstable_by(f64::total_cmp);
}

/// Compute a quantile over unsorted samples
///
/// The input is left untouched; a sorted copy is made internally.
///
/// # Errors
///
/// Returns [`PoolError::InvalidArgument`] if `samples` is empty.
///
/// # Examples
///
/// ```
/// use poolstat_core::{quantile, Percentile};
///
/// let p25 = Percentile::new(25.0).unwrap();
/// assert_eq!(quantile(&[4.0, 1.0, 3.0, 2.0], p25).unwrap(), 1.75);
/// ```
pub fn quantile(samples: &[f64], percentile: Percentile) -> Result<f64> {
    if samples.is_empty() {
        return Err(PoolError::empty_input());
    }
    let mut sorted = samples.to_vec();
    sort_samples(&mut sorted);
    quantile_sorted(&sorted, percentile)
}

/// Compute a quantile over samples already sorted ascending
///
/// # Errors
///
/// Returns [`PoolError::InvalidArgument`] if `sorted` is empty.
pub fn quantile_sorted(sorted: &[f64], percentile: Percentile) -> Result<f64> {
    let n = sorted.len();
    if n == 0 {
        return Err(PoolError::empty_input());
    }
    debug_assert!(sorted
        .windows(2)
        .all(|w| w[0].total_cmp(&w[1]) != Ordering::Greater));

    let rank = percentile.fraction() * (n - 1) as f64;
    let lo = rank.floor();
    if rank == lo {
        return Ok(sorted[lo as usize]);
    }

    // rank < n - 1 because percentile < 100, so hi stays in bounds
    let lo_idx = lo as usize;
    let hi_idx = (rank.ceil() as usize).min(n - 1);
    let weight = rank - lo;
    let lower = sorted[lo_idx];
    let upper = sorted[hi_idx];
    let span = upper - lower;
    let value = if span.is_finite() {
        lower + weight * span
    } else {
        // samples at opposite ends of the f64 range
        lower * (1.0 - weight) + upper * weight
    };
    Ok(value.max(lower).min(upper))
}
