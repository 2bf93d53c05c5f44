//! # Generation Errors
//!
//! Everything that can make a generation call fail. Callers of
//! [`generate`](crate::generate) only ever see `None`; the variants here are
//! what gets logged.

use std::path::PathBuf;

use frame_mesh::MeshError;
use thiserror::Error;

/// Errors raised while building, exporting or writing a frame.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Geometry construction, validation or GLB serialization failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// Writing the output file or creating its directory failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Strict mode rejected a material key
    #[error("Unknown material '{0}' (expected wood, steel or concrete)")]
    UnknownMaterial(String),
}

impl GenerationError {
    /// Creates an IO error tagged with the path being written.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
