//! Per-marker time limits.
//!
//! Only the drag path clamps; programmatic updates are written as given.

use crate::error::{MarkerError, MarkerResult};
use crate::types::Marker;

pub struct LimitPolicy;

impl LimitPolicy {
    /// Clamp a candidate time against the marker's limits.
    #[inline]
    pub fn clamp(candidate: f64, marker: &Marker) -> f64 {
        Self::clamp_to(candidate, marker.lower_limit, marker.upper_limit)
    }

    /// Lower bound is checked first. With inverted limits a value below the
    /// lower bound therefore lands on the lower bound and anything else on
    /// the upper bound.
    #[inline]
    pub fn clamp_to(candidate: f64, lower: Option<f64>, upper: Option<f64>) -> f64 {
        match (lower, upper) {
            (Some(lower), _) if candidate < lower => lower,
            (_, Some(upper)) if candidate > upper => upper,
            _ => candidate,
        }
    }

    /// Each bound must be a finite, non-negative time, and `lower` may not
    /// exceed `upper`. Bound errors are reported before inversion.
    pub fn validate(lower: Option<f64>, upper: Option<f64>) -> MarkerResult<()> {
        for bound in [lower, upper].into_iter().flatten() {
            if !bound.is_finite() || bound < 0.0 {
                return Err(MarkerError::InvalidLimit(bound));
            }
        }
        match (lower, upper) {
            (Some(lower), Some(upper)) if lower > upper => {
                Err(MarkerError::InvertedLimits { lower, upper })
            }
            _ => Ok(()),
        }
    }
}
