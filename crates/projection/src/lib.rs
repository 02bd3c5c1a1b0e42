//! Map projections between geographic and planar coordinates.
//!
//! Implements projections from scratch without external dependencies.

pub mod error;
pub mod mercator;

pub use error::ProjectionError;
pub use mercator::Mercator;

use density_common::{Cartesian, Geographic};

/// A projection from geographic locations to points in the map plane and
/// back.
///
/// Only the single-point transforms need implementing; the batch forms
/// check lengths up front and then apply the single-point transform
/// element-wise.
pub trait Projection {
    /// Project a geographic location onto the plane.
    fn forward(&self, src: &Geographic) -> Cartesian;

    /// Recover the geographic location of a point in the plane.
    fn inverse(&self, src: &Cartesian) -> Geographic;

    /// Project every element of `src` into the matching slot of `dst`.
    ///
    /// Fails without writing anything when the slices differ in length.
    fn forward_batch(&self, dst: &mut [Cartesian], src: &[Geographic]) -> Result<(), ProjectionError> {
        check_lengths(src.len(), dst.len())?;
        for (out, geo) in dst.iter_mut().zip(src) {
            *out = self.forward(geo);
        }
        Ok(())
    }

    /// Inverse-project every element of `src` into the matching slot of `dst`.
    ///
    /// Fails without writing anything when the slices differ in length.
    fn inverse_batch(&self, dst: &mut [Geographic], src: &[Cartesian]) -> Result<(), ProjectionError> {
        check_lengths(src.len(), dst.len())?;
        for (out, point) in dst.iter_mut().zip(src) {
            *out = self.inverse(point);
        }
        Ok(())
    }

    /// Project a batch into a freshly allocated vector.
    fn forward_all(&self, src: &[Geographic]) -> Vec<Cartesian> {
        src.iter().map(|geo| self.forward(geo)).collect()
    }
}

fn check_lengths(source_len: usize, destination_len: usize) -> Result<(), ProjectionError> {
    if source_len != destination_len {
        return Err(ProjectionError::LengthMismatch {
            source_len,
            destination_len,
        });
    }
    Ok(())
}
