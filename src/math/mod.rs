//! Mathematical utilities for sway analysis.
//!
//! This module provides:
//! - [`point`]: plain 2D point value type with free-function arithmetic
//! - [`covariance`]: two-pass mean and scatter accumulation
//! - [`eigen`]: closed-form symmetric 2×2 eigen-decomposition

pub mod covariance;
pub mod eigen;
pub mod point;

pub use covariance::{mean, scatter, Covariance};
pub use eigen::{decompose, EigenDecomposition};
pub use point::Point2;
