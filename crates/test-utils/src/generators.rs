//! Point generators for creating predictable test data.
//!
//! Generators either place points at exactly known grid cells or draw them
//! from a seeded RNG, so every test run sees the same data.

use density_common::{Cartesian, Viewport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The Cartesian center of pixel `(col, row)` for a `width x height` scene
/// over `viewport`. Row 0 is the top (max y) of the viewport.
///
/// Aggregating the returned point always increments exactly that pixel.
///
/// # Example
///
/// ```
/// use density_common::Viewport;
/// use test_utils::cell_center;
///
/// let vp = Viewport::new(0.0, 10.0, 0.0, 10.0).unwrap();
/// let p = cell_center(&vp, 10, 10, 0, 0);
/// assert_eq!((p.x(), p.y()), (0.5, 9.5));
/// ```
pub fn cell_center(viewport: &Viewport, width: u32, height: u32, col: u32, row: u32) -> Cartesian {
    let cell_w = viewport.width() / f64::from(width);
    let cell_h = viewport.height() / f64::from(height);
    Cartesian::new(
        viewport.min_x() + (f64::from(col) + 0.5) * cell_w,
        viewport.max_y() - (f64::from(row) + 0.5) * cell_h,
    )
}

/// One point at the center of every pixel, row-major.
pub fn grid_points(viewport: &Viewport, width: u32, height: u32) -> Vec<Cartesian> {
    let mut points = Vec::with_capacity(width as usize * height as usize);
    for row in 0..height {
        for col in 0..width {
            points.push(cell_center(viewport, width, height, col, row));
        }
    }
    points
}

/// `count` points evenly spaced on a circle.
pub fn ring_points(center: Cartesian, radius: f64, count: usize) -> Vec<Cartesian> {
    (0..count)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / count.max(1) as f64;
            Cartesian::new(
                center.x() + radius * angle.cos(),
                center.y() + radius * angle.sin(),
            )
        })
        .collect()
}

/// `count` points uniformly distributed over a (slightly enlarged) viewport,
/// so some of them fall outside it.
pub fn seeded_cloud(viewport: &Viewport, count: usize, seed: u64) -> Vec<Cartesian> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pad_x = viewport.width() * 0.1;
    let pad_y = viewport.height() * 0.1;

    (0..count)
        .map(|_| {
            Cartesian::new(
                rng.gen_range(viewport.min_x() - pad_x..viewport.max_x() + pad_x),
                rng.gen_range(viewport.min_y() - pad_y..viewport.max_y() + pad_y),
            )
        })
        .collect()
}

/// `count` standard-normal samples around the origin (Box-Muller).
pub fn seeded_gaussian(count: usize, seed: u64) -> Vec<Cartesian> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            // 1 - [0, 1) keeps the log argument in (0, 1].
            let u1: f64 = 1.0 - rng.gen::<f64>();
            let u2: f64 = rng.gen();
            let r = (-2.0 * u1.ln()).sqrt();
            let theta = std::f64::consts::TAU * u2;
            Cartesian::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Viewport {
        Viewport::new(0.0, 10.0, 0.0, 10.0).unwrap()
    }

    #[test]
    fn test_cell_center_corners() {
        let vp = unit_box();
        let top_left = cell_center(&vp, 5, 5, 0, 0);
        assert_eq!((top_left.x(), top_left.y()), (1.0, 9.0));
        let bottom_right = cell_center(&vp, 5, 5, 4, 4);
        assert_eq!((bottom_right.x(), bottom_right.y()), (9.0, 1.0));
    }

    #[test]
    fn test_grid_points_count() {
        let points = grid_points(&unit_box(), 4, 3);
        assert_eq!(points.len(), 12);
        assert!(points.iter().all(|p| unit_box().contains(p)));
    }

    #[test]
    fn test_seeded_cloud_is_deterministic() {
        let a = seeded_cloud(&unit_box(), 100, 42);
        let b = seeded_cloud(&unit_box(), 100, 42);
        assert_eq!(a, b);
        assert!(a.iter().any(|p| !unit_box().contains(p)));
    }

    #[test]
    fn test_seeded_gaussian_is_finite() {
        let points = seeded_gaussian(1000, 7);
        assert!(points.iter().all(|p| p.x().is_finite() && p.y().is_finite()));
    }

    #[test]
    fn test_ring_points() {
        let ring = ring_points(Cartesian::new(1.0, 1.0), 2.0, 8);
        assert_eq!(ring.len(), 8);
        for p in ring {
            let d = ((p.x() - 1.0).powi(2) + (p.y() - 1.0).powi(2)).sqrt();
            assert!((d - 2.0).abs() < 1e-12);
        }
    }
}
