//! 95%-confidence sway ellipse.
//!
//! The ellipse is the smallest one expected to contain at least 95% of the
//! center-of-pressure samples under a bivariate-normal assumption. Formulas
//! follow the standard confidence-ellipse construction: scatter matrix →
//! closed-form eigen-decomposition → semi-axes scaled by the chi-square
//! critical value for 2 degrees of freedom.

use tracing::warn;

use crate::config::AnalysisConfig;
use crate::math::covariance::{mean, scatter};
use crate::math::eigen::decompose;
use crate::math::point::{add, scale, Point2};
use crate::sample::{Axis, Sample};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chi-square critical value for 2 degrees of freedom at 95% confidence.
pub const CHI_SQUARED_95_2DF: f64 = 5.991;

/// A 95%-confidence sway ellipse.
///
/// Invariants: `area == CHI_SQUARED_95_2DF · π · semi_major_axis ·
/// semi_minor_axis` and `semi_major_axis >= semi_minor_axis >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwayEllipse {
    /// Enclosed area.
    pub area: f64,

    /// Semi-axis along the dominant sway direction.
    pub semi_major_axis: f64,

    /// Semi-axis along the orthogonal direction.
    pub semi_minor_axis: f64,

    /// Unit eigenvectors of the scatter matrix, major axis first.
    pub eigenvectors: [Point2; 2],

    /// Mean center-of-pressure position.
    pub mean: Point2,
}

impl Default for SwayEllipse {
    fn default() -> Self {
        Self {
            area: 0.0,
            semi_major_axis: 0.0,
            semi_minor_axis: 0.0,
            eigenvectors: [Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)],
            mean: Point2::ZERO,
        }
    }
}

impl SwayEllipse {
    /// Build the confidence ellipse of a sample sequence.
    ///
    /// Samples are projected onto the combined axes; see [`from_points`] for
    /// the point-set variant.
    ///
    /// [`from_points`]: Self::from_points
    #[must_use]
    pub fn from_samples(samples: &[Sample], config: &AnalysisConfig) -> Self {
        let points: Vec<Point2> = samples.iter().map(|s| s.point(Axis::Both)).collect();
        Self::from_points(&points, config)
    }

    /// Build the confidence ellipse of a 2D point set.
    ///
    /// Fewer than 2 points yields a degenerate (zero-area, axis-aligned)
    /// ellipse: the semi-axes divide the scatter eigenvalues by `n - 1`, so
    /// no meaningful ellipse exists below that size. A single point still
    /// sets the mean.
    #[must_use]
    pub fn from_points(points: &[Point2], config: &AnalysisConfig) -> Self {
        if points.is_empty() {
            return Self::default();
        }

        let mean = mean(points);

        if points.len() < 2 {
            return Self {
                mean,
                ..Self::default()
            };
        }

        let cov = scatter(points, mean);
        let eigen = decompose(&cov, config.numerical_eps);

        let denom = (points.len() - 1) as f64;
        let semi_major_axis = (eigen.values[0] / denom).sqrt();
        // The smaller eigenvalue can round fractionally below zero.
        let semi_minor_axis = (eigen.values[1].max(0.0) / denom).sqrt();

        let area = CHI_SQUARED_95_2DF * std::f64::consts::PI * semi_major_axis * semi_minor_axis;

        Self {
            area,
            semi_major_axis,
            semi_minor_axis,
            eigenvectors: eigen.vectors,
            mean,
        }
    }

    /// Sample `count` evenly spaced boundary points for rendering.
    ///
    /// Points are centered on the origin, at angles `θᵢ = i · 2π / count`:
    ///
    /// ```text
    /// point(θ) = √5.991 · (cos θ · a · v₀ + sin θ · b · v₁)
    /// ```
    ///
    /// A zero count is reported and yields an empty vector rather than
    /// aborting the caller. The result is recomputed deterministically on
    /// every call; no state is retained.
    #[must_use]
    pub fn boundary_points(&self, count: usize) -> Vec<Point2> {
        if count == 0 {
            warn!(count, "boundary point count must be positive");
            return Vec::new();
        }

        let sqrt_scale = CHI_SQUARED_95_2DF.sqrt();
        let increment = 2.0 * std::f64::consts::PI / count as f64;

        (0..count)
            .map(|i| {
                let theta = increment * i as f64;
                let major = scale(self.eigenvectors[0], theta.cos() * self.semi_major_axis);
                let minor = scale(self.eigenvectors[1], theta.sin() * self.semi_minor_axis);
                scale(add(major, minor), sqrt_scale)
            })
            .collect()
    }
}
