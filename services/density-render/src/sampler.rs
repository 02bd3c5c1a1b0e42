//! Synthetic point sources for the render driver.

use crate::config::SampleMode;
use density_common::{Cartesian, Geographic};
use projection::{Mercator, Projection, ProjectionError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Latitude limit for geographic samples, in degrees.
const MAX_LATITUDE_DEG: f64 = 85.0;

/// Standard deviation of geographic latitudes, in degrees.
const LATITUDE_SIGMA_DEG: f64 = 25.0;

/// Draws batches of points in plane coordinates.
pub struct Sampler {
    rng: StdRng,
    mode: SampleMode,
    projection: Mercator,
    geographic: Vec<Geographic>,
}

impl Sampler {
    /// A sampler seeded with `seed`, or from entropy when `None`.
    pub fn new(mode: SampleMode, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            mode,
            projection: Mercator::new(),
            geographic: Vec::new(),
        }
    }

    pub fn mode(&self) -> SampleMode {
        self.mode
    }

    /// Fill `batch` with fresh samples.
    pub fn fill(&mut self, batch: &mut [Cartesian]) -> Result<(), ProjectionError> {
        match self.mode {
            SampleMode::Gaussian => {
                for point in batch.iter_mut() {
                    let x = standard_normal(&mut self.rng);
                    let y = standard_normal(&mut self.rng);
                    *point = Cartesian::new(x, y);
                }
                Ok(())
            }
            SampleMode::Geographic => {
                self.geographic.clear();
                for _ in 0..batch.len() {
                    let lon = self.rng.gen_range(-180.0..180.0);
                    let lat = (standard_normal(&mut self.rng) * LATITUDE_SIGMA_DEG)
                        .clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG);
                    self.geographic.push(Geographic::from_degrees(lon, lat));
                }
                self.projection.forward_batch(batch, &self.geographic)
            }
        }
    }
}

/// One standard-normal sample (Box-Muller).
fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
