//! Error types for projections.

use thiserror::Error;

/// Errors that can occur while projecting batches of points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// Source and destination slices have different lengths.
    #[error("source and destination must have same length (source {source_len}, destination {destination_len})")]
    LengthMismatch {
        source_len: usize,
        destination_len: usize,
    },
}
