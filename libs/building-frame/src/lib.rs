//! # Building Frame
//!
//! Parametric generator for simple multi-story building frames. A material
//! key, a floor count and a slab thickness produce one slab, four corner
//! columns and four beams per floor, merged into a single mesh with a single
//! PBR material and exported as binary glTF.
//!
//! ## Architecture
//!
//! ```text
//! request (clamp) → layout (boxes) → frame-mesh (cuboids, merge, GLB)
//!                                          │
//!                                   generator → Bytes | File
//! ```
//!
//! [`store`] and [`retention`] are helpers for callers that keep generated
//! output around; the generator never touches either.
//!
//! ## Usage
//!
//! ```rust
//! use building_frame::{generate, OutputMode};
//!
//! let asset = generate("steel", 3, 0.2, OutputMode::Bytes).unwrap();
//! let glb = asset.as_bytes().unwrap();
//! assert_eq!(&glb[0..4], b"glTF");
//!
//! // Invalid input is clamped, not rejected
//! assert!(generate("concrete", 0, -1.0, OutputMode::Bytes).is_some());
//! ```

pub mod error;
pub mod generator;
pub mod layout;
pub mod material;
pub mod request;
pub mod retention;
pub mod store;

pub use error::GenerationError;
pub use generator::{BuildingMesh, FrameGenerator, GeneratedAsset, GeneratorConfig, OutputMode};
pub use layout::{Primitive, StructuralUnit, UnitCounts};
pub use material::{FrameMaterial, MaterialPolicy};
pub use request::{FrameParams, FrameRequest};
pub use retention::{prune_generated, prune_generated_keeping};
pub use store::{AssetId, AssetStore, StoreStats};

/// Generates a building frame with the default configuration.
///
/// Never panics on any input: floors below one become one, thicknesses
/// below 0.05 (or NaN) become 0.05, and unknown materials render gray.
/// Returns `None` when generation fails, after logging the cause.
///
/// In [`OutputMode::File`] the GLB is written under `static/` relative to
/// the working directory. Use [`FrameGenerator`] with a
/// [`GeneratorConfig`] to choose another directory.
pub fn generate(
    material: &str,
    num_floors: i64,
    slab_thickness: f64,
    mode: OutputMode,
) -> Option<GeneratedAsset> {
    FrameGenerator::default().generate(&FrameRequest::new(material, num_floors, slab_thickness), mode)
}
