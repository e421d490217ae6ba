//! Error types for the carving pipeline.

use thiserror::Error;

/// Failures raised by the carving core.
#[derive(Debug, Error)]
pub enum CarveError {
    /// Invalid resolution, batch size, or bounding box. Detected before
    /// any sampling happens.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// The flat occupancy sequence does not match the voxel count of the
    /// grid. This indicates a defect in the enumeration/reshape pairing,
    /// not a recoverable runtime condition.
    #[error("shape mismatch: expected {expected} occupancy flags, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Cooperative cancellation was requested between batches.
    #[error("carve cancelled")]
    Cancelled,
}
