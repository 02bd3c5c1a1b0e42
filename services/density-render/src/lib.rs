//! Density renderer driver.
//!
//! Generates a synthetic point cloud in batches, bins it into a scene,
//! spreads and color-maps it, composites the layer onto a background and
//! writes a PNG.

pub mod config;
pub mod pipeline;
pub mod sampler;

pub use config::{ConfigError, RenderConfig, SampleMode};
pub use pipeline::{render_to_file, render_to_png, RenderSummary};
