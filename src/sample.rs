//! Center-of-pressure samples and axis projection.
//!
//! A balance-measurement session yields an ordered sequence of [`Sample`]s;
//! every metric reads them through an [`Axis`] selector, either as a scalar
//! or as a projected 2D point.

use crate::error::{AnalysisError, Result};
use crate::math::point::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sway axis selector.
///
/// The force platform reports medio-lateral sway on x and anterior-posterior
/// sway on y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Anterior-posterior (y-coordinate).
    Ap,
    /// Medio-lateral (x-coordinate).
    Ml,
    /// Both axes combined.
    Both,
}

/// One time-stamped center-of-pressure reading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Seconds since the start of the session.
    pub time: f64,
    /// Medio-lateral coordinate.
    pub x: f64,
    /// Anterior-posterior coordinate.
    pub y: f64,
}

impl Sample {
    /// Create a new sample.
    #[must_use]
    pub const fn new(time: f64, x: f64, y: f64) -> Self {
        Self { time, x, y }
    }

    /// Scalar coordinate along an axis.
    ///
    /// `Ml` reads x; `Ap` and `Both` read y. Scalar consumers (the amplitude
    /// metrics) treat the combined selector as anterior-posterior.
    #[must_use]
    pub const fn scalar(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Ml => self.x,
            Axis::Ap | Axis::Both => self.y,
        }
    }

    /// Project onto an axis as a 2D point.
    ///
    /// Single-axis projections keep the other coordinate at zero, so point
    /// distances between projections reduce to per-axis distances.
    #[must_use]
    pub const fn point(&self, axis: Axis) -> Point2 {
        match axis {
            Axis::Ap => Point2::new(0.0, self.y),
            Axis::Ml => Point2::new(self.x, 0.0),
            Axis::Both => Point2::new(self.x, self.y),
        }
    }
}

/// Validate a sample sequence for strict intake.
///
/// The metric calculators themselves are total over any slice; this check is
/// for callers that want to reject malformed sensor output at the boundary.
///
/// # Errors
///
/// Returns an error if any coordinate or timestamp is non-finite, or if
/// timestamps decrease.
pub fn validate_samples(samples: &[Sample]) -> Result<()> {
    for (i, s) in samples.iter().enumerate() {
        if !(s.time.is_finite() && s.x.is_finite() && s.y.is_finite()) {
            return Err(AnalysisError::non_finite_sample(i));
        }
    }

    for i in 1..samples.len() {
        if samples[i].time < samples[i - 1].time {
            return Err(AnalysisError::non_monotonic_time(i));
        }
    }

    Ok(())
}
