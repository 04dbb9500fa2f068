//! # Geometry Errors
//!
//! Error types for triangulation and extrusion operations.
//!
//! ## Error Policy
//!
//! - All failures are explicit `Result` values; the core never logs or
//!   prints
//! - No operation mutates caller-visible state before failing
//! - Degenerate triangulation is not an error: the ear-clipping loop
//!   falls back to best-effort clipping and reports a counter instead

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during footprint geometry operations.
#[derive(Debug, Clone, Error)]
pub enum GeometryError {
    /// The polygon cannot enclose any area.
    ///
    /// Raised at construction: fewer than 3 points in a ring, a
    /// non-finite coordinate, or a ring with zero signed area.
    #[error("Invalid polygon: {message}")]
    InvalidPolygon { message: String },

    /// A face index addresses outside its vertex buffer.
    ///
    /// Always fatal; indicates a logic defect upstream, never expected
    /// from well-formed input.
    #[error("Face index {index} out of range for {len} vertices")]
    IndexOutOfRange { index: u32, len: usize },

    /// Extrusion requested with a height of zero, or within `EPSILON`
    /// of it.
    ///
    /// A zero-height solid has no volume, so the request is rejected
    /// rather than treated as identity.
    #[error("Extrusion height must be non-zero")]
    ZeroHeightExtrusion,

    /// The flattened vertex buffer does not match the footprint.
    ///
    /// Wall stitching derives indices from the footprint's ring
    /// layouts, so both inputs must describe the same vertex set.
    #[error("Vertex buffer has {actual} vertices, footprint has {expected}")]
    VertexCountMismatch { expected: usize, actual: usize },

    /// Extrusion requested with a NaN or infinite height.
    #[error("Extrusion height must be finite, got {height}")]
    NonFiniteHeight { height: f64 },
}

impl GeometryError {
    /// Creates an invalid polygon error.
    pub fn invalid_polygon(message: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            message: message.into(),
        }
    }

    /// Creates an index out of range error.
    pub fn index_out_of_range(index: u32, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for footprint geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================
