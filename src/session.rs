//! Accumulation of one measurement session's samples.
//!
//! This module provides [`SessionRecorder`], a buffer that collects
//! center-of-pressure readings as a force platform delivers them and hands
//! out the session's metrics and ellipse on demand.

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::ellipse::SwayEllipse;
use crate::metrics::SessionMetrics;
use crate::sample::Sample;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stance taken by the patient during a measurement.
///
/// Carried as session metadata; it has no effect on the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pose {
    /// Feet joined and parallel.
    BothLegsJoinedParallel,
    /// Feet at a 30° angle.
    BothLegs30Angle,
    /// Feet parallel, shoulder-width apart.
    BothLegsParallelApart,
    /// Tandem stance, left foot in front.
    TandemLeftFront,
    /// Tandem stance, right foot in front.
    TandemRightFront,
    /// Single-leg stance on the left leg.
    LeftLeg,
    /// Single-leg stance on the right leg.
    RightLeg,
}

impl Pose {
    /// Every stance, in protocol order.
    pub const ALL: [Self; 7] = [
        Self::BothLegsJoinedParallel,
        Self::BothLegs30Angle,
        Self::BothLegsParallelApart,
        Self::TandemLeftFront,
        Self::TandemRightFront,
        Self::LeftLeg,
        Self::RightLeg,
    ];
}

/// Recorder for one balance-measurement session.
///
/// Collects samples in arrival order, drops non-monotonic arrivals, and
/// lazily computes the session metrics, caching them until the next push.
///
/// # Example
///
/// ```
/// use stabilometry::{AnalysisConfig, Sample, SessionRecorder};
///
/// let mut recorder = SessionRecorder::new(AnalysisConfig::default());
///
/// recorder.push(Sample::new(0.0, 0.1, -0.2));
/// recorder.push(Sample::new(0.01, 0.2, -0.1));
/// // ... more readings ...
///
/// if let Some(metrics) = recorder.metrics() {
///     let _ = metrics.sway_path;
/// }
/// ```
#[derive(Debug)]
pub struct SessionRecorder {
    config: AnalysisConfig,
    pose: Option<Pose>,
    samples: Vec<Sample>,
    cached_metrics: Option<SessionMetrics>,
}

impl SessionRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            pose: None,
            samples: Vec::new(),
            cached_metrics: None,
        }
    }

    /// Tag the session with the stance being measured.
    #[must_use]
    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = Some(pose);
        self
    }

    /// Append a reading.
    ///
    /// Samples whose timestamp precedes the last accepted one are dropped;
    /// the sensor driver occasionally replays readings on reconnect.
    pub fn push(&mut self, sample: Sample) {
        if let Some(last) = self.samples.last() {
            if sample.time < last.time {
                debug!(time = sample.time, "dropping non-monotonic sample");
                return;
            }
        }

        self.samples.push(sample);
        self.cached_metrics = None;
    }

    /// Append a batch of readings.
    pub fn extend(&mut self, samples: &[Sample]) {
        for &sample in samples {
            self.push(sample);
        }
    }

    /// Session metrics over everything recorded so far.
    ///
    /// Computed on first access after a push, then cached. Returns `None`
    /// only when the configuration rejects the computation (e.g. a zero time
    /// delta under the `Error` policy).
    pub fn metrics(&mut self) -> Option<&SessionMetrics> {
        if self.cached_metrics.is_none() {
            self.cached_metrics = SessionMetrics::from_samples(&self.samples, &self.config).ok();
        }

        self.cached_metrics.as_ref()
    }

    /// Confidence ellipse over everything recorded so far.
    #[must_use]
    pub fn ellipse(&self) -> SwayEllipse {
        SwayEllipse::from_samples(&self.samples, &self.config)
    }

    /// Discard all recorded samples.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.cached_metrics = None;
    }

    /// Number of accepted samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time span covered by the recorded samples, in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => 0.0,
        }
    }

    /// The stance tag, if any.
    #[must_use]
    pub const fn pose(&self) -> Option<Pose> {
        self.pose
    }

    /// The recorded samples, in arrival order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Consume the recorder and return the sample sequence.
    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}
