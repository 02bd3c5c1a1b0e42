//! Common test fixtures for density rendering tests.
//!
//! Viewports are given as `(min_x, max_x, min_y, max_y)`.

use density_common::Viewport;

/// `[0, 10] x [0, 10]`, the boundary-test viewport.
pub const UNIT_BOX: (f64, f64, f64, f64) = (0.0, 10.0, 0.0, 10.0);

/// `[-5, 5] x [-5, 5]`, the viewport of the demo renderer.
pub const DEMO: (f64, f64, f64, f64) = (-5.0, 5.0, -5.0, 5.0);

/// The whole Mercator plane, one unit per turn of longitude.
pub const MERCATOR_WORLD: (f64, f64, f64, f64) = (-0.5, 0.5, -0.5, 0.5);

/// Invalid (min > max on x)
pub const INVALID: (f64, f64, f64, f64) = (10.0, 5.0, 0.0, 1.0);

/// Build a viewport from one of the tuples above.
///
/// # Panics
///
/// Panics if the bounds are invalid; intended for fixtures only.
pub fn viewport(bounds: (f64, f64, f64, f64)) -> Viewport {
    let (min_x, max_x, min_y, max_y) = bounds;
    Viewport::new(min_x, max_x, min_y, max_y).expect("fixture viewport must be valid")
}
