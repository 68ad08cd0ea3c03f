//! Error types for sway analysis operations.

use thiserror::Error;

/// Main error type for sway analysis operations.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A sample carries a NaN or infinite coordinate or timestamp.
    #[error("Non-finite sample at index {index}")]
    NonFiniteSample { index: usize },

    /// Sample timestamps are not monotonically non-decreasing.
    #[error("Timestamps must be monotonically non-decreasing at index {index}")]
    NonMonotonicTime { index: usize },

    /// Two consecutive samples share a timestamp, so velocity is undefined.
    #[error("Zero time delta between samples {index} and {}", .index + 1)]
    ZeroTimeDelta { index: usize },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for sway analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl AnalysisError {
    /// Create a non-finite sample error.
    #[must_use]
    pub const fn non_finite_sample(index: usize) -> Self {
        Self::NonFiniteSample { index }
    }

    /// Create a non-monotonic time error.
    #[must_use]
    pub const fn non_monotonic_time(index: usize) -> Self {
        Self::NonMonotonicTime { index }
    }

    /// Create a zero time delta error.
    #[must_use]
    pub const fn zero_time_delta(index: usize) -> Self {
        Self::ZeroTimeDelta { index }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
