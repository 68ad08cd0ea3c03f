//! # stabilometry
//!
//! Postural-sway analysis for center-of-pressure (COP) recordings.
//!
//! Given the time-stamped 2D COP samples of one balance-measurement session,
//! this crate computes the standard set of clinical stability metrics (sway
//! path, mean distance, mean velocity, swing amplitudes) and the
//! 95%-confidence sway ellipse, using a closed-form eigen-decomposition of
//! the 2×2 scatter matrix.
//!
//! Everything is a pure, synchronous computation over an immutable sample
//! slice: no retained state, no I/O. Independent metrics may be computed in
//! parallel over the same slice if a caller wants to.
//!
//! # Quick Start
//!
//! ```
//! use stabilometry::{AnalysisConfig, Sample, SessionMetrics, SwayEllipse};
//!
//! let samples = vec![
//!     Sample::new(0.00, 0.12, -0.30),
//!     Sample::new(0.01, 0.15, -0.24),
//!     Sample::new(0.02, 0.11, -0.18),
//!     Sample::new(0.03, 0.05, -0.26),
//! ];
//!
//! let config = AnalysisConfig::default();
//! let metrics = SessionMetrics::from_samples(&samples, &config)?;
//! let ellipse = SwayEllipse::from_samples(&samples, &config);
//!
//! // Scalar outputs for storage, boundary points for charting.
//! let _row = (metrics.sway_path, metrics.mean_sway_velocity, ellipse.area);
//! let _outline = ellipse.boundary_points(36);
//! # Ok::<(), stabilometry::AnalysisError>(())
//! ```
//!
//! # Axes
//!
//! The force platform reports medio-lateral sway on x and anterior-posterior
//! sway on y; every metric is available per [`Axis`] where the clinical
//! definition distinguishes them.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` derives on the value types a
//!   persistence layer consumes.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod ellipse;
pub mod error;
pub mod math;
pub mod metrics;
pub mod sample;
pub mod session;

// Re-exports for convenient access
pub use config::{AnalysisConfig, ZeroDeltaPolicy};
pub use ellipse::{SwayEllipse, CHI_SQUARED_95_2DF};
pub use error::{AnalysisError, Result};
pub use math::point::Point2;
pub use metrics::{
    average_amplitude, direction_changes, maximal_amplitude, mean_distance, mean_sway_velocity,
    sway_path, SessionMetrics,
};
pub use sample::{validate_samples, Axis, Sample};
pub use session::{Pose, SessionRecorder};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
