//! Mercator projection.
//!
//! Maps longitude/latitude (radians) onto a plane where one full turn of
//! longitude spans one unit of x:
//!
//! - forward: `x = lon / 2π`, `y = ln(tan(π/4 + lat/2)) / 2π`
//! - inverse: `lon = 2π·x`, `lat = 2·atan(exp(2π·y)) − π/2`
//!
//! Latitudes of exactly ±π/2 project to ±infinity.

use crate::Projection;
use density_common::{Cartesian, Geographic};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

/// The (spherical, normalized) Mercator projection. Stateless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mercator;

impl Mercator {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Mercator {
    fn forward(&self, src: &Geographic) -> Cartesian {
        let x = src.longitude() / TAU;
        let y = (FRAC_PI_4 + 0.5 * src.latitude()).tan().ln() / TAU;
        Cartesian::new(x, y)
    }

    fn inverse(&self, src: &Cartesian) -> Geographic {
        let longitude = TAU * src.x();
        let latitude = 2.0 * (TAU * src.y()).exp().atan() - FRAC_PI_2;
        Geographic::new(longitude, latitude)
    }
}
