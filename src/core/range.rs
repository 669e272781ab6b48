use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed numeric interval `[min, max]`.
///
/// Equality is exact floating-point comparison; the no-op checks in the
/// axis setters rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// Fallback used wherever a well-defined range must be substituted for
    /// missing data.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Builds a range from two endpoints in either order.
    ///
    /// Intended for values produced by the axis transforms, which are finite
    /// for finite inputs.
    #[must_use]
    pub fn ordered(a: f64, b: f64) -> Self {
        debug_assert!(a.is_finite() && b.is_finite());
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns a range with the same center and width multiplied by `rate`.
    ///
    /// Used to pad auto-computed bounds (default rate 1.05, a 5% margin).
    #[must_use]
    pub fn scaled_about_center(self, rate: f64) -> Self {
        debug_assert!(rate.is_finite() && rate >= 0.0);
        let center = (self.min + self.max) / 2.0;
        let half = self.width() * rate / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Returns the range translated by `delta`, width preserved.
    #[must_use]
    pub fn shifted(self, delta: f64) -> Self {
        debug_assert!(delta.is_finite());
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}
