//! Density-field rendering for large point clouds.
//!
//! Points are binned into a fixed-resolution counter grid ([`Scene`]),
//! optionally smoothed with a box-filter spread, and turned into pixels by a
//! [`ColorMapping`]:
//! - Simple presence/absence mapping
//! - Logarithmic heat scale with automatic normalization
//!
//! Compositing onto a background and PNG encoding are provided for callers
//! that want a finished image.

pub mod color;
pub mod composite;
pub mod error;
pub mod mapping;
pub mod png;
pub mod scene;

pub use color::{Color, PixelGrid};
pub use error::{RenderError, SceneError};
pub use mapping::{default_mapping, simple_mapping, ColorMapping, MappingKind};
pub use scene::Scene;
