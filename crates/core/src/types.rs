//! Core types for the pool store
//!
//! - [`PoolId`]: integer identifier of a pool
//! - [`Percentile`]: percentile validated to lie strictly inside (0, 100)
//! - [`UpsertOutcome`]: whether an upsert created or extended a pool
//! - [`QuantileResult`]: a computed quantile plus the pool size it came from

use serde::{Deserialize, Serialize};

use crate::error::PoolError;

/// Identifier of a pool
///
/// Pools are keyed by plain integers on the wire; the newtype keeps them
/// from being confused with sample counts or percentiles in signatures.
///
/// # Examples
///
/// ```
/// use poolstat_core::PoolId;
///
/// let id = PoolId::new(7);
/// assert_eq!(id.as_i64(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PoolId(i64);

impl PoolId {
    /// Create a pool identifier
    pub const fn new(id: i64) -> Self {
        PoolId(id)
    }

    /// Get the raw integer
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for PoolId {
    fn from(id: i64) -> Self {
        PoolId(id)
    }
}

impl From<i32> for PoolId {
    fn from(id: i32) -> Self {
        PoolId(i64::from(id))
    }
}

/// Accepts any integer, or a float with no fractional part (`1.0`).
impl<'de> Deserialize<'de> for PoolId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(PoolIdVisitor)
    }
}

struct PoolIdVisitor;

impl<'de> serde::de::Visitor<'de> for PoolIdVisitor {
    type Value = PoolId;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("an integer pool id")
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<PoolId, E> {
        Ok(PoolId(v))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<PoolId, E> {
        i64::try_from(v)
            .map(PoolId)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<PoolId, E> {
        // 2^63 itself is out of range, hence the strict upper bound
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(PoolId(v as i64))
        } else {
            Err(E::invalid_value(serde::de::Unexpected::Float(v), &self))
        }
    }
}

impl std::fmt::Display for PoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A percentile strictly between 0 and 100
///
/// The bounds are exclusive: 0 and 100 are rejected, as is NaN. Holding a
/// `Percentile` is proof the value was checked, so the quantile algorithm
/// never re-validates it.
///
/// # Examples
///
/// ```
/// use poolstat_core::Percentile;
///
/// assert!(Percentile::new(50.0).is_ok());
/// assert!(Percentile::new(0.0).is_err());
/// assert!(Percentile::new(100.0).is_err());
/// assert!(Percentile::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentile(f64);

impl Percentile {
    /// Exclusive lower bound
    pub const MIN: f64 = 0.0;

    /// Exclusive upper bound
    pub const MAX: f64 = 100.0;

    /// Validate and wrap a percentile
    pub fn new(value: f64) -> Result<Self, PoolError> {
        // NaN fails both comparisons
        if value > Self::MIN && value < Self::MAX {
            Ok(Percentile(value))
        } else {
            Err(PoolError::InvalidArgument {
                reason: format!(
                    "percentile must satisfy {} < p < {}, got {}",
                    Self::MIN,
                    Self::MAX,
                    value
                ),
            })
        }
    }

    /// Get the percentile as a number in (0, 100)
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the percentile as a fraction in (0, 1)
    pub fn fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl TryFrom<f64> for Percentile {
    type Error = PoolError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Percentile::new(value)
    }
}

impl<'de> Deserialize<'de> for Percentile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Percentile::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Percentile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of an upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertOutcome {
    /// The pool did not exist and was created
    Inserted,
    /// The values were appended to an existing pool
    Appended,
}

impl UpsertOutcome {
    /// Wire name of the outcome
    pub fn as_str(&self) -> &'static str {
        match self {
            UpsertOutcome::Inserted => "inserted",
            UpsertOutcome::Appended => "appended",
        }
    }
}

impl std::fmt::Display for UpsertOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A computed quantile together with the sample count it was computed over
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantileResult {
    /// Interpolated quantile value
    pub value: f64,
    /// Number of samples in the pool at query time
    pub total_count: usize,
}
