//! Density grid: bins Cartesian points into a fixed-resolution counter grid.
//!
//! A [`Scene`] covers a [`Viewport`] at `width x height` resolution. Points
//! are accumulated with [`Scene::aggregate`] (any number of batches, in any
//! order), optionally smoothed with [`Scene::spread`], and turned into
//! pixels by [`Scene::render`].
//!
//! Counters are `u64` and saturate instead of wrapping, both when
//! aggregating and when spreading.

use crate::color::PixelGrid;
use crate::error::{RenderError, SceneError};
use crate::mapping::ColorMapping;
use density_common::{Cartesian, Viewport};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Minimum number of bins for the spread to fan out over rows in parallel.
pub const PARALLEL_THRESHOLD: usize = 4096; // 64x64 or larger

/// Linear bin index of pixel `(x, y)` in a row-major `width x height` grid.
///
/// Returns `None` if `x >= width` or `y >= height`. Every grid access in
/// this crate goes through here.
#[inline]
pub fn index(width: u32, height: u32, x: u32, y: u32) -> Option<usize> {
    if x >= width || y >= height {
        return None;
    }
    Some(width as usize * y as usize + x as usize)
}

/// A plane onto which points are drawn as per-pixel hit counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    bins: Vec<u64>,
    width: u32,
    height: u32,
    viewport: Viewport,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(width: u32, height: u32, viewport: Viewport) -> Result<Self, SceneError> {
        let len = bin_count(width, height)?;
        debug!(width, height, ?viewport, "Creating scene");

        Ok(Self {
            bins: vec![0; len],
            width,
            height,
            viewport,
        })
    }

    /// Create an empty scene from raw viewport bounds.
    pub fn from_bounds(
        width: u32,
        height: u32,
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> Result<Self, SceneError> {
        let viewport = Viewport::new(min_x, max_x, min_y, max_y)?;
        Self::new(width, height, viewport)
    }

    /// Restore a scene from a previously captured counter grid.
    pub fn with_bins(
        width: u32,
        height: u32,
        viewport: Viewport,
        bins: Vec<u64>,
    ) -> Result<Self, SceneError> {
        let expected = bin_count(width, height)?;
        if bins.len() != expected {
            return Err(SceneError::BinCount {
                expected,
                actual: bins.len(),
            });
        }

        Ok(Self {
            bins,
            width,
            height,
            viewport,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The counter grid, row-major.
    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    /// Linear bin index of pixel `(x, y)`, or `None` outside the grid.
    pub fn index(&self, x: u32, y: u32) -> Option<usize> {
        index(self.width, self.height, x, y)
    }

    /// Count stored at pixel `(x, y)`.
    pub fn count(&self, x: u32, y: u32) -> Option<u64> {
        self.index(x, y).map(|idx| self.bins[idx])
    }

    pub fn max_count(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all bins, saturating.
    pub fn total_count(&self) -> u64 {
        self.bins.iter().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Aggregate a batch of points into the scene.
    ///
    /// A point is counted if `min_x <= x < max_x` and `min_y < y <= max_y`;
    /// anything else is silently dropped. Row 0 is the top of the viewport
    /// (`max_y`). Batches are purely additive.
    pub fn aggregate(&mut self, points: &[Cartesian]) {
        let viewport = self.viewport;
        let scale_x = f64::from(self.width) / viewport.width();
        let scale_y = f64::from(self.height) / viewport.height();
        let mut accepted = 0usize;

        for point in points {
            if !viewport.contains(point) {
                continue;
            }

            // Both offsets are non-negative here; `as` saturates on overflow.
            let plot_x = ((point.x() - viewport.min_x()) * scale_x).floor() as u32;
            let plot_y = ((viewport.max_y() - point.y()) * scale_y).floor() as u32;

            // Rounding right at the closed edges can land one past the grid.
            if let Some(idx) = index(self.width, self.height, plot_x, plot_y) {
                self.bins[idx] = self.bins[idx].saturating_add(1);
                accepted += 1;
            }
        }

        trace!(
            accepted,
            dropped = points.len() - accepted,
            "Aggregated batch"
        );
    }

    /// Reset every bin to zero, keeping resolution and viewport.
    pub fn clear(&mut self) {
        self.bins.fill(0);
    }

    /// Replace every bin with the saturating sum of the `(2r+1) x (2r+1)`
    /// square around it.
    ///
    /// Neighbors outside the grid count as zero. The sum is computed from
    /// the pre-spread grid into a new buffer, so spreading twice compounds
    /// the radius. Radius 0 is a no-op.
    pub fn spread(&mut self, radius: u8) {
        if radius == 0 {
            return;
        }

        let (width, height) = (self.width, self.height);
        let source = self.bins.as_slice();
        let mut spread = vec![0u64; source.len()];

        // Chunk `y` holds bins index(0, y) ..= index(width - 1, y).
        let fill_row = |(y, row): (usize, &mut [u64])| {
            let y = y as u32;
            for (x, bin) in (0..width).zip(row.iter_mut()) {
                *bin = neighborhood_sum(source, width, height, x, y, radius);
            }
        };

        let rows = spread.len() / width as usize;
        if spread.len() >= PARALLEL_THRESHOLD {
            spread
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(fill_row);
        } else {
            spread.chunks_mut(width as usize).enumerate().for_each(fill_row);
        }

        debug!(radius, rows, "Spread scene");
        self.bins = spread;
    }

    /// Map the current counts to colors.
    ///
    /// The mapping must return exactly `width * height` colors; the counter
    /// grid is not modified.
    pub fn render<M>(&self, mapping: &M) -> Result<PixelGrid, RenderError>
    where
        M: ColorMapping + ?Sized,
    {
        let colors = mapping.map(&self.bins);
        let expected = self.bins.len();

        if colors.len() != expected {
            return Err(RenderError::MappingLength {
                expected,
                actual: colors.len(),
                width: self.width,
                height: self.height,
            });
        }

        debug!(width = self.width, height = self.height, "Rendered scene");

        // Colors come back in bin order, which is the pixel order.
        Ok(PixelGrid::from_parts(self.width, self.height, colors))
    }
}

fn bin_count(width: u32, height: u32) -> Result<usize, SceneError> {
    if width == 0 || height == 0 {
        return Err(SceneError::ZeroResolution { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(SceneError::TooLarge { width, height })
}

/// Saturating sum of the bins within Chebyshev distance `radius` of `(x, y)`.
fn neighborhood_sum(bins: &[u64], width: u32, height: u32, x: u32, y: u32, radius: u8) -> u64 {
    let r = i64::from(radius);
    let mut sum = 0u64;

    for dy in -r..=r {
        let Ok(yy) = u32::try_from(i64::from(y) + dy) else {
            continue;
        };
        for dx in -r..=r {
            let Ok(xx) = u32::try_from(i64::from(x) + dx) else {
                continue;
            };
            if let Some(idx) = index(width, height, xx, yy) {
                sum = sum.saturating_add(bins[idx]);
            }
        }
    }

    sum
}
