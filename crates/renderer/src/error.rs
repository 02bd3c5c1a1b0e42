//! Error types for scenes and rendering.

use density_common::ViewportError;
use thiserror::Error;

/// Errors raised while configuring a scene.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// Width or height is zero.
    #[error("scene resolution must be non-zero, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    /// The viewport bounds are invalid.
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),

    /// `width * height` bins cannot be addressed on this platform.
    #[error("scene of {width}x{height} bins is too large to allocate")]
    TooLarge { width: u32, height: u32 },

    /// A restored counter grid does not match the resolution.
    #[error("expected {expected} bins, got {actual}")]
    BinCount { expected: usize, actual: usize },
}

/// Errors raised while rendering a scene or encoding its pixels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The color mapping returned the wrong number of colors.
    #[error("color mapping returned {actual} pixels, but expected {expected} for a ({width} * {height}) image")]
    MappingLength {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },

    /// Image encoding failed.
    #[error("encoding failed: {0}")]
    Encode(String),
}
