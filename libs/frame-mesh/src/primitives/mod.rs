//! # Primitives
//!
//! Mesh generation for the box shapes a building frame is assembled from.

pub mod cuboid;

pub use cuboid::{create_cuboid, CUBOID_TRIANGLES, CUBOID_VERTICES};
