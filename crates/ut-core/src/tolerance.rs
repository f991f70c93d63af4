//! Validated floating-point tolerance.

use serde::{Deserialize, Serialize};

use crate::errors::{codes, AssertError};

/// Maximum absolute difference for which two floats are still considered equal.
///
/// Always non-negative and never NaN. Deserialization runs the same
/// validation as [`Tolerance::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    /// Tolerance admitting only identical values.
    pub const EXACT: Tolerance = Tolerance(0.0);

    /// Validates `delta` and wraps it.
    pub fn new(delta: f64) -> Result<Self, AssertError> {
        if delta.is_nan() || delta < 0.0 {
            return Err(AssertError::precondition(
                codes::INVALID_TOLERANCE,
                format!("tolerance must be a non-negative number, got {delta}"),
            ));
        }
        Ok(Self(delta))
    }

    /// Returns the raw delta.
    pub fn delta(self) -> f64 {
        self.0
    }

    /// Whether `actual` lies within the tolerance of `expected`.
    ///
    /// Two NaNs are equal, and equal infinities pass whatever the delta.
    pub fn admits(self, expected: f64, actual: f64) -> bool {
        if expected == actual || (expected.is_nan() && actual.is_nan()) {
            return true;
        }
        (expected - actual).abs() <= self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::EXACT
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = AssertError;

    fn try_from(delta: f64) -> Result<Self, Self::Error> {
        Self::new(delta)
    }
}

impl From<Tolerance> for f64 {
    fn from(tolerance: Tolerance) -> Self {
        tolerance.0
    }
}
