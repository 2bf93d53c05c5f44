//! # Frame Mesh
//!
//! Triangle meshes for the building frame generator and their export to
//! binary glTF.
//!
//! ## Architecture
//!
//! ```text
//! primitives (cuboid) → Mesh::concatenate → export::glb (GLB bytes)
//! ```
//!
//! All geometry is kept in f64 ([`glam::DVec3`]). Narrowing to f32 only
//! happens when buffers are written for export.
//!
//! ## Usage
//!
//! ```rust
//! use frame_mesh::{export::write_glb, primitives::create_cuboid, Mesh, PbrMaterial};
//! use glam::DVec3;
//!
//! let mut slab = create_cuboid(DVec3::new(4.0, 4.0, 0.2), true).unwrap();
//! slab.translate(DVec3::new(0.0, 0.0, 0.1));
//! let mesh = Mesh::concatenate([&slab]);
//! let material = PbrMaterial::new("wood", [0.6, 0.4, 0.2, 1.0], 0.0, 0.8);
//! let glb = write_glb(&mesh, &material).unwrap();
//! assert_eq!(&glb[0..4], b"glTF");
//! ```

pub mod error;
pub mod export;
pub mod material;
pub mod mesh;
pub mod primitives;

pub use error::MeshError;
pub use material::PbrMaterial;
pub use mesh::Mesh;
