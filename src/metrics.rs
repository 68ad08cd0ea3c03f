//! Clinical sway metrics over one measurement session.
//!
//! Every metric is a pure function of the sample slice. Sessions with fewer
//! than 2 samples short-circuit to zero for every metric; that is a defined
//! degenerate result, not an error.

use crate::config::{AnalysisConfig, ZeroDeltaPolicy};
use crate::ellipse::SwayEllipse;
use crate::error::{AnalysisError, Result};
use crate::math::point::distance;
use crate::sample::{Axis, Sample};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cumulative distance traveled by the center of pressure along an axis.
///
/// Sums the Euclidean distance between consecutive axis-projected samples.
/// Non-negative and non-decreasing in sequence length.
#[must_use]
pub fn sway_path(samples: &[Sample], axis: Axis) -> f64 {
    samples
        .windows(2)
        .map(|w| distance(w[0].point(axis), w[1].point(axis)))
        .sum()
}

/// Mean distance of the sway trace from its starting point.
///
/// Averages the combined-axes distance of every later sample to the FIRST
/// sample. The sum runs over `n - 1` distances but is divided by `n`; this
/// mismatch with the other averaged metrics is preserved deliberately for
/// output fidelity and is worth surfacing to domain experts before changing.
#[must_use]
pub fn mean_distance(samples: &[Sample]) -> f64 {
    if samples.len() <= 1 {
        return 0.0;
    }

    let first = samples[0].point(Axis::Both);
    let sum: f64 = samples[1..]
        .iter()
        .map(|s| distance(s.point(Axis::Both), first))
        .sum();

    sum / samples.len() as f64
}

/// Mean sway velocity along an axis.
///
/// Averages `distance / Δt` over consecutive sample pairs. Pairs with a zero
/// (or negative) time delta are resolved by [`ZeroDeltaPolicy`]: `Skip`
/// removes them from both the sum and the pair count, `Error` aborts. With no
/// degenerate pairs the divisor is exactly `n - 1`.
///
/// # Errors
///
/// Returns [`AnalysisError::ZeroTimeDelta`] under the `Error` policy.
pub fn mean_sway_velocity(samples: &[Sample], axis: Axis, config: &AnalysisConfig) -> Result<f64> {
    if samples.len() <= 1 {
        return Ok(0.0);
    }

    let mut sum = 0.0;
    let mut pairs = 0usize;

    for (i, w) in samples.windows(2).enumerate() {
        let dt = w[1].time - w[0].time;

        if dt <= 0.0 {
            match config.zero_delta {
                ZeroDeltaPolicy::Skip => continue,
                ZeroDeltaPolicy::Error => return Err(AnalysisError::zero_time_delta(i)),
            }
        }

        sum += distance(w[0].point(axis), w[1].point(axis)) / dt;
        pairs += 1;
    }

    if pairs == 0 {
        return Ok(0.0);
    }

    Ok(sum / pairs as f64)
}

/// Count direction reversals of an axis coordinate over the session.
///
/// Counting starts at 1; the first two samples establish the initial trend,
/// and a reversal is a flip of that running trend. Ties never count as a
/// reversal. Returns 0 for fewer than 2 samples.
#[must_use]
pub fn direction_changes(samples: &[Sample], axis: Axis) -> usize {
    if samples.len() <= 1 {
        return 0;
    }

    let mut changes = 1;
    let mut previous = samples[0].scalar(axis);
    let mut increasing = samples[1].scalar(axis) > previous;

    for sample in &samples[1..] {
        let current = sample.scalar(axis);

        if increasing && current < previous {
            increasing = false;
            changes += 1;
        } else if !increasing && current > previous {
            increasing = true;
            changes += 1;
        }

        previous = current;
    }

    changes
}

/// Average single-swing amplitude along an axis.
///
/// Divides the axis sway path by the number of direction changes, segmenting
/// the path into oscillation swings.
#[must_use]
pub fn average_amplitude(samples: &[Sample], axis: Axis, axis_sway_path: f64) -> f64 {
    if samples.len() <= 1 {
        return 0.0;
    }

    axis_sway_path / direction_changes(samples, axis) as f64
}

/// Maximal peak-to-peak amplitude along an axis.
#[must_use]
pub fn maximal_amplitude(samples: &[Sample], axis: Axis) -> f64 {
    if samples.len() <= 1 {
        return 0.0;
    }

    let mut max = samples[0].scalar(axis);
    let mut min = max;

    for sample in samples {
        let value = sample.scalar(axis);
        max = max.max(value);
        min = min.min(value);
    }

    max - min
}

/// Aggregate stability metrics of one completed measurement session.
///
/// Built once from an immutable sample sequence and never mutated afterward.
/// Each field is a named numeric output for the persistence and presentation
/// layers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionMetrics {
    /// Combined-axes sway path.
    pub sway_path: f64,
    /// Anterior-posterior sway path.
    pub sway_path_ap: f64,
    /// Medio-lateral sway path.
    pub sway_path_ml: f64,

    /// Mean distance from the starting point.
    pub mean_distance: f64,

    /// Combined-axes mean sway velocity.
    pub mean_sway_velocity: f64,
    /// Anterior-posterior mean sway velocity.
    pub mean_sway_velocity_ap: f64,
    /// Medio-lateral mean sway velocity.
    pub mean_sway_velocity_ml: f64,

    /// Average anterior-posterior swing amplitude.
    pub sway_average_amplitude_ap: f64,
    /// Average medio-lateral swing amplitude.
    pub sway_average_amplitude_ml: f64,

    /// Maximal anterior-posterior peak-to-peak amplitude.
    pub sway_maximal_amplitude_ap: f64,
    /// Maximal medio-lateral peak-to-peak amplitude.
    pub sway_maximal_amplitude_ml: f64,

    /// Area of the 95%-confidence sway ellipse.
    pub ellipse_area: f64,
}

impl SessionMetrics {
    /// Compute every session metric from an ordered sample sequence.
    ///
    /// Sessions with 0 or 1 samples yield all-zero metrics.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid configuration, or on a zero time delta
    /// under [`ZeroDeltaPolicy::Error`].
    pub fn from_samples(samples: &[Sample], config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;

        if samples.len() <= 1 {
            return Ok(Self::default());
        }

        let sway_path_ap = sway_path(samples, Axis::Ap);
        let sway_path_ml = sway_path(samples, Axis::Ml);

        Ok(Self {
            sway_path: sway_path(samples, Axis::Both),
            sway_path_ap,
            sway_path_ml,
            mean_distance: mean_distance(samples),
            mean_sway_velocity: mean_sway_velocity(samples, Axis::Both, config)?,
            mean_sway_velocity_ap: mean_sway_velocity(samples, Axis::Ap, config)?,
            mean_sway_velocity_ml: mean_sway_velocity(samples, Axis::Ml, config)?,
            sway_average_amplitude_ap: average_amplitude(samples, Axis::Ap, sway_path_ap),
            sway_average_amplitude_ml: average_amplitude(samples, Axis::Ml, sway_path_ml),
            sway_maximal_amplitude_ap: maximal_amplitude(samples, Axis::Ap),
            sway_maximal_amplitude_ml: maximal_amplitude(samples, Axis::Ml),
            ellipse_area: SwayEllipse::from_samples(samples, config).area,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_samples() -> Vec<Sample> {
        vec![
            Sample::new(1.0, 1.0, 1.0),
            Sample::new(2.0, 1.0, 2.0),
            Sample::new(3.0, 2.0, 1.0),
            Sample::new(4.0, 5.0, -1.0),
        ]
    }

    #[test]
    fn test_sway_path_per_axis() {
        let samples = reference_samples();

        assert_relative_eq!(
            sway_path(&samples, Axis::Both),
            1.0 + 2.0f64.sqrt() + 13.0f64.sqrt()
        );
        assert_relative_eq!(sway_path(&samples, Axis::Ap), 4.0);
        assert_relative_eq!(sway_path(&samples, Axis::Ml), 4.0);
    }

    #[test]
    fn test_sway_path_non_decreasing() {
        let samples = reference_samples();

        let mut previous = 0.0;
        for n in 0..=samples.len() {
            let path = sway_path(&samples[..n], Axis::Both);
            assert!(path >= previous);
            previous = path;
        }
    }

    #[test]
    fn test_mean_distance_divides_by_n() {
        let samples = reference_samples();

        // Distances from (1, 1): 1, 1, sqrt(20); divided by 4, not 3.
        assert_relative_eq!(mean_distance(&samples), (2.0 + 20.0f64.sqrt()) / 4.0);
    }

    #[test]
    fn test_mean_sway_velocity() {
        let samples = reference_samples();
        let config = AnalysisConfig::default();

        // Unit time deltas: velocity is path / (n - 1).
        assert_relative_eq!(
            mean_sway_velocity(&samples, Axis::Both, &config).unwrap(),
            (1.0 + 2.0f64.sqrt() + 13.0f64.sqrt()) / 3.0
        );
    }

    #[test]
    fn test_velocity_zero_delta_skip() {
        let samples = [
            Sample::new(0.0, 0.0, 0.0),
            Sample::new(1.0, 1.0, 0.0),
            Sample::new(1.0, 2.0, 0.0),
            Sample::new(2.0, 3.0, 0.0),
        ];
        let config = AnalysisConfig::default();

        // The duplicated timestamp drops one pair from sum and count.
        assert_relative_eq!(
            mean_sway_velocity(&samples, Axis::Both, &config).unwrap(),
            1.0
        );
    }

    #[test]
    fn test_velocity_zero_delta_error() {
        let samples = [
            Sample::new(0.0, 0.0, 0.0),
            Sample::new(1.0, 1.0, 0.0),
            Sample::new(1.0, 2.0, 0.0),
        ];
        let config = AnalysisConfig::default().with_zero_delta(ZeroDeltaPolicy::Error);

        assert!(matches!(
            mean_sway_velocity(&samples, Axis::Both, &config),
            Err(AnalysisError::ZeroTimeDelta { index: 1 })
        ));
    }

    #[test]
    fn test_direction_changes_reference() {
        // AP values 1, 2, 1, -1: one rise then one fall.
        assert_eq!(direction_changes(&reference_samples(), Axis::Ap), 2);
    }

    #[test]
    fn test_average_amplitude() {
        let samples = reference_samples();

        let path_ap = sway_path(&samples, Axis::Ap);
        assert_relative_eq!(average_amplitude(&samples, Axis::Ap, path_ap), 2.0);
    }

    #[test]
    fn test_maximal_amplitude() {
        let samples = reference_samples();

        assert_relative_eq!(maximal_amplitude(&samples, Axis::Ap), 3.0);
        assert_relative_eq!(maximal_amplitude(&samples, Axis::Ml), 4.0);
    }

    #[test]
    fn test_degenerate_sizes_are_zero() {
        let config = AnalysisConfig::default();
        let single = [Sample::new(0.0, 3.0, -2.0)];

        assert_eq!(
            SessionMetrics::from_samples(&[], &config).unwrap(),
            SessionMetrics::default()
        );
        assert_eq!(
            SessionMetrics::from_samples(&single, &config).unwrap(),
            SessionMetrics::default()
        );
    }

    #[test]
    fn test_aggregate_matches_parts() {
        let samples = reference_samples();
        let config = AnalysisConfig::default();
        let metrics = SessionMetrics::from_samples(&samples, &config).unwrap();

        assert_relative_eq!(metrics.sway_path, sway_path(&samples, Axis::Both));
        assert_relative_eq!(metrics.sway_path_ap, sway_path(&samples, Axis::Ap));
        assert_relative_eq!(metrics.mean_distance, mean_distance(&samples));
        assert_relative_eq!(
            metrics.mean_sway_velocity_ml,
            mean_sway_velocity(&samples, Axis::Ml, &config).unwrap()
        );
        assert_relative_eq!(metrics.sway_maximal_amplitude_ml, 4.0);
        assert!(metrics.ellipse_area > 0.0);
    }
}
