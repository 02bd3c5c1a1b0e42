//! Immutable coordinate value types.
//!
//! - [`Cartesian`]: a point in the map plane, no units imposed.
//! - [`Geographic`]: longitude/latitude, in radians by convention.

use serde::{Deserialize, Serialize};

/// A two-dimensional point in Cartesian coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian {
    x: f64,
    y: f64,
}

impl Cartesian {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Abscissa (x-coordinate).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Ordinate (y-coordinate).
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Cartesian {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A geographic location given as longitude and latitude.
///
/// Values are stored in radians. Use [`Geographic::from_degrees`] when the
/// source data is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geographic {
    longitude: f64,
    latitude: f64,
}

impl Geographic {
    /// Create a location from longitude and latitude in radians.
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Create a location from longitude and latitude in degrees.
    pub fn from_degrees(longitude_deg: f64, latitude_deg: f64) -> Self {
        Self::new(longitude_deg.to_radians(), latitude_deg.to_radians())
    }

    /// Longitude in radians.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in radians.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// (longitude, latitude) in degrees.
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.longitude.to_degrees(), self.latitude.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cartesian_accessors() {
        let p = Cartesian::new(1.5, -2.25);
        assert_eq!(p.x(), 1.5);
        assert_eq!(p.y(), -2.25);
        assert_eq!(Cartesian::from((1.5, -2.25)), p);
    }

    #[test]
    fn test_geographic_degrees() {
        let geo = Geographic::from_degrees(180.0, -90.0);
        assert!((geo.longitude() - std::f64::consts::PI).abs() < 1e-12);
        assert!((geo.latitude() + std::f64::consts::FRAC_PI_2).abs() < 1e-12);

        let (lon, lat) = geo.to_degrees();
        assert!((lon - 180.0).abs() < 1e-9);
        assert!((lat + 90.0).abs() < 1e-9);
    }
}
