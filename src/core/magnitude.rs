use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Power-law mapping from a place's recorded distance to a visual radius or
/// vertical offset.
///
/// `map(v) = range_min + (range_max - range_min) * (v / domain_max)^exponent`.
/// Exponents below 1 compress large distances, emphasizing nearby places; the
/// default curvature is the square-root compression `0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeScale {
    domain_max: f64,
    range_min: f64,
    range_max: f64,
    exponent: f64,
}

impl MagnitudeScale {
    /// Builds the scale over `[0, domain_max]`.
    ///
    /// A non-positive `domain_max` (no resolvable distances, or all places at
    /// home) falls back to a domain of `[0, 1]`.
    pub fn new(
        domain_max: f64,
        range_min: f64,
        range_max: f64,
        exponent: f64,
    ) -> TimelineResult<Self> {
        if !domain_max.is_finite() {
            return Err(TimelineError::InvalidData(
                "magnitude domain max must be finite".to_owned(),
            ));
        }
        if !range_min.is_finite() || !range_max.is_finite() {
            return Err(TimelineError::InvalidData(
                "magnitude range must be finite".to_owned(),
            ));
        }
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(TimelineError::InvalidData(format!(
                "magnitude exponent must be finite and > 0, got {exponent}"
            )));
        }

        let domain_max = if domain_max > 0.0 { domain_max } else { 1.0 };
        Ok(Self {
            domain_max,
            range_min,
            range_max,
            exponent,
        })
    }

    #[must_use]
    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Maps a distance into the range.
    ///
    /// `map(0) == range_min` and `map(domain_max) == range_max` hold exactly;
    /// the mapping is monotonic over non-negative input.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let normalized = (value / self.domain_max).powf(self.exponent);
        self.range_min + (self.range_max - self.range_min) * normalized
    }
}
