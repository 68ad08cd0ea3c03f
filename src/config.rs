//! Configuration for sway analysis computation.
//!
//! This module provides the [`AnalysisConfig`] struct which centralizes the
//! numerical thresholds and degenerate-input policies of the engine.
//!
//! # Example
//!
//! ```
//! use stabilometry::{AnalysisConfig, ZeroDeltaPolicy};
//!
//! // Use default configuration
//! let config = AnalysisConfig::default();
//!
//! // Reject duplicated timestamps instead of skipping them
//! let strict = AnalysisConfig::default().with_zero_delta(ZeroDeltaPolicy::Error);
//! ```

use crate::error::{AnalysisError, Result};

/// Policy for consecutive samples that share a timestamp.
///
/// Velocity is undefined over a zero time delta; the engine never divides by
/// it, and this policy decides what happens instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroDeltaPolicy {
    /// Exclude the pair from both the velocity numerator and the pair count.
    #[default]
    Skip,
    /// Surface [`AnalysisError::ZeroTimeDelta`] to the caller.
    Error,
}

/// Configuration for sway analysis computation.
///
/// All computations are deterministic; the configuration only controls
/// numerical degeneracy handling.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Threshold below which the off-diagonal scatter entry is treated as
    /// zero. An axis-aligned point cloud makes the eigenvector formula
    /// divide by `cxy`; at or below this threshold the decomposition falls
    /// back to the coordinate axes.
    pub numerical_eps: f64,

    /// What to do when two consecutive samples share a timestamp.
    pub zero_delta: ZeroDeltaPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            numerical_eps: 1e-12,
            zero_delta: ZeroDeltaPolicy::Skip,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !(self.numerical_eps > 0.0 && self.numerical_eps.is_finite()) {
            return Err(AnalysisError::invalid_config(
                "numerical_eps must be positive and finite",
            ));
        }
        Ok(())
    }

    /// Set the degenerate-scatter threshold.
    #[must_use]
    pub const fn with_numerical_eps(mut self, eps: f64) -> Self {
        self.numerical_eps = eps;
        self
    }

    /// Set the zero time delta policy.
    #[must_use]
    pub const fn with_zero_delta(mut self, policy: ZeroDeltaPolicy) -> Self {
        self.zero_delta = policy;
        self
    }
}
