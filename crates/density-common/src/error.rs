//! Error types for common value types.

use std::fmt;
use thiserror::Error;

/// Coordinate axis a viewport error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors raised while constructing or parsing a viewport.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    /// The lower bound is not strictly below the upper bound.
    #[error("invalid {axis} range: min {min} must be less than max {max}")]
    Inverted { axis: Axis, min: f64, max: f64 },

    /// One of the bounds is NaN or infinite.
    #[error("viewport bounds must be finite")]
    NotFinite,

    #[error("invalid viewport format: {0}. Expected 'minx,miny,maxx,maxy'")]
    InvalidFormat(String),

    #[error("invalid number in viewport: {0}")]
    InvalidNumber(String),
}
