//! Common types shared across the density rendering workspace.

pub mod coordinates;
pub mod error;
pub mod viewport;

pub use coordinates::{Cartesian, Geographic};
pub use error::{Axis, ViewportError};
pub use viewport::Viewport;
