//! Rectangular viewport over the Cartesian plane.

use crate::coordinates::Cartesian;
use crate::error::{Axis, ViewportError};
use serde::{Deserialize, Serialize};

/// The region of the plane a scene covers.
///
/// Invariant: `min_x < max_x` and `min_y < max_y`, all bounds finite. The
/// only way to obtain a `Viewport` is through a validating constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawViewport", into = "RawViewport")]
pub struct Viewport {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawViewport {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl TryFrom<RawViewport> for Viewport {
    type Error = ViewportError;

    fn try_from(raw: RawViewport) -> Result<Self, Self::Error> {
        Viewport::new(raw.min_x, raw.max_x, raw.min_y, raw.max_y)
    }
}

impl From<Viewport> for RawViewport {
    fn from(v: Viewport) -> Self {
        RawViewport {
            min_x: v.min_x,
            max_x: v.max_x,
            min_y: v.min_y,
            max_y: v.max_y,
        }
    }
}

impl Viewport {
    /// Create a viewport from its bounds.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, ViewportError> {
        if ![min_x, max_x, min_y, max_y].iter().all(|v| v.is_finite()) {
            return Err(ViewportError::NotFinite);
        }
        if min_x >= max_x {
            return Err(ViewportError::Inverted {
                axis: Axis::X,
                min: min_x,
                max: max_x,
            });
        }
        if min_y >= max_y {
            return Err(ViewportError::Inverted {
                axis: Axis::Y,
                min: min_y,
                max: max_y,
            });
        }

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Parse a bounds string: "minx,miny,maxx,maxy"
    pub fn parse(s: &str) -> Result<Self, ViewportError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(ViewportError::InvalidFormat(s.to_string()));
        }

        let mut values = [0.0f64; 4];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part
                .parse()
                .map_err(|_| ViewportError::InvalidNumber(part.to_string()))?;
        }

        let [min_x, min_y, max_x, max_y] = values;
        Self::new(min_x, max_x, min_y, max_y)
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Extent along x in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along y in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check whether a point is accepted by this viewport.
    ///
    /// The x range is `[min_x, max_x)` while the y range is `(min_y, max_y]`:
    /// image rows grow downward, so the closed edge follows row 0 to the top.
    pub fn contains(&self, point: &Cartesian) -> bool {
        let (x, y) = (point.x(), point.y());
        (x >= self.min_x && x < self.max_x) && (y > self.min_y && y <= self.max_y)
    }
}
