//! # Mesh Errors
//!
//! Error types for mesh construction and export.

use thiserror::Error;

/// Errors that can occur while building or exporting a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate geometry (zero, negative or non-finite extents)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Merged mesh failed a structural check
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// Vertex count above [`MAX_VERTICES`](config::constants::MAX_VERTICES)
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Triangle count above [`MAX_TRIANGLES`](config::constants::MAX_TRIANGLES)
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Nothing to export
    #[error("Cannot export an empty mesh")]
    EmptyMesh,

    /// glTF JSON could not be serialized
    #[error("glTF serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A GLB chunk does not fit the 32-bit length fields
    #[error("GLB payload too large: {size} bytes")]
    PayloadTooLarge { size: usize },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}
