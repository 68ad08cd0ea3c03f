//! Closed-form eigen-decomposition for symmetric 2×2 scatter matrices.
//!
//! A symmetric 2×2 matrix admits an exact solution, so no iterative
//! eigensolver is involved:
//!
//! ```text
//! avg  = (cxx + cyy) / 2
//! diff = sqrt(cxy² + ((cxx - cyy) / 2)²)
//! λ₀   = avg + diff
//! λ₁   = avg - diff
//! ```
//!
//! The eigenvector for λ follows from `(cxx - λ)·vx + cxy·vy = 0`, which
//! divides by `cxy`. An axis-aligned point cloud (`cxy ≈ 0`) therefore gets
//! an explicit fallback: the coordinate axes themselves, paired so the axis
//! with the larger diagonal entry carries the larger eigenvalue.

use crate::math::covariance::Covariance;
use crate::math::point::Point2;

/// Result of a symmetric 2×2 eigen-decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenDecomposition {
    /// Eigenvalues in descending order.
    pub values: [f64; 2],

    /// Unit-length eigenvectors, `vectors[i]` paired with `values[i]`.
    pub vectors: [Point2; 2],
}

impl EigenDecomposition {
    /// Ratio of the larger to the smaller eigenvalue.
    ///
    /// High values indicate strongly directional sway.
    #[must_use]
    pub fn anisotropy(&self) -> f64 {
        self.values[0] / self.values[1]
    }
}

/// Decompose a symmetric 2×2 scatter matrix.
///
/// # Arguments
///
/// * `cov` - Scatter matrix (sums of deviations, any normalization)
/// * `eps` - Threshold below which `|cxy|` counts as axis-aligned
///
/// # Returns
///
/// Eigenvalues in descending order with unit-length eigenvectors.
#[must_use]
pub fn decompose(cov: &Covariance, eps: f64) -> EigenDecomposition {
    let avg = (cov.cxx + cov.cyy) / 2.0;
    let diff = (cov.cxy * cov.cxy + ((cov.cxx - cov.cyy) / 2.0).powi(2)).sqrt();

    let values = [avg + diff, avg - diff];

    let vectors = if cov.cxy.abs() <= eps {
        // Axis-aligned: the coordinate axes are the eigenvectors, larger
        // diagonal entry first.
        if cov.cxx >= cov.cyy {
            [Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)]
        } else {
            [Point2::new(0.0, 1.0), Point2::new(1.0, 0.0)]
        }
    } else {
        [
            eigenvector(values[0], cov),
            eigenvector(values[1], cov),
        ]
    };

    EigenDecomposition { values, vectors }
}

/// Unit eigenvector for a known eigenvalue of a non-degenerate matrix.
fn eigenvector(value: f64, cov: &Covariance) -> Point2 {
    let t = (cov.cxx - value) / cov.cxy;
    let vx = 1.0 / (1.0 + t * t).sqrt();

    Point2::new(vx, -t * vx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point::{dot, norm};
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_reference_matrix() {
        let cov = Covariance::new(17.0, -8.0, 5.0);
        let eigen = decompose(&cov, EPS);

        assert_relative_eq!(eigen.values[0], 21.0);
        assert_relative_eq!(eigen.values[1], 1.0);

        let s5 = 5.0f64.sqrt();
        assert_relative_eq!(eigen.vectors[0].x, 2.0 / s5, epsilon = 1e-12);
        assert_relative_eq!(eigen.vectors[0].y, -1.0 / s5, epsilon = 1e-12);
        assert_relative_eq!(eigen.vectors[1].x, 1.0 / s5, epsilon = 1e-12);
        assert_relative_eq!(eigen.vectors[1].y, 2.0 / s5, epsilon = 1e-12);

        assert_relative_eq!(eigen.anisotropy(), 21.0);
    }

    #[test]
    fn test_descending_order_and_unit_length() {
        let cov = Covariance::new(10.75, -6.75, 4.75);
        let eigen = decompose(&cov, EPS);

        assert!(eigen.values[0] >= eigen.values[1]);
        assert_relative_eq!(norm(eigen.vectors[0]), 1.0, epsilon = 1e-12);
        assert_relative_eq!(norm(eigen.vectors[1]), 1.0, epsilon = 1e-12);
        assert_relative_eq!(dot(eigen.vectors[0], eigen.vectors[1]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_axis_aligned_x_dominant() {
        let cov = Covariance::new(9.0, 0.0, 4.0);
        let eigen = decompose(&cov, EPS);

        assert_relative_eq!(eigen.values[0], 9.0);
        assert_relative_eq!(eigen.values[1], 4.0);
        assert_eq!(eigen.vectors[0], Point2::new(1.0, 0.0));
        assert_eq!(eigen.vectors[1], Point2::new(0.0, 1.0));
    }

    #[test]
    fn test_axis_aligned_y_dominant() {
        let cov = Covariance::new(2.0, 0.0, 7.0);
        let eigen = decompose(&cov, EPS);

        assert_relative_eq!(eigen.values[0], 7.0);
        assert_relative_eq!(eigen.values[1], 2.0);
        assert_eq!(eigen.vectors[0], Point2::new(0.0, 1.0));
        assert_eq!(eigen.vectors[1], Point2::new(1.0, 0.0));
    }

    #[test]
    fn test_isotropic() {
        let cov = Covariance::new(3.0, 0.0, 3.0);
        let eigen = decompose(&cov, EPS);

        assert_relative_eq!(eigen.values[0], 3.0);
        assert_relative_eq!(eigen.values[1], 3.0);
    }
}
