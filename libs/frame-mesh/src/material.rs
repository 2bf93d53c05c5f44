//! # PBR Material
//!
//! Metallic-roughness appearance attached to a whole mesh at export.

use serde::{Deserialize, Serialize};

/// A physically-based material in the glTF metallic-roughness model.
///
/// Emission is always zero for generated frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PbrMaterial {
    /// Material name written to the exported document.
    pub name: String,
    /// Linear RGBA base color, each component in [0, 1].
    pub base_color: [f32; 4],
    /// Metalness in [0, 1].
    pub metallic: f32,
    /// Roughness in [0, 1].
    pub roughness: f32,
    /// Emissive RGB color.
    pub emissive: [f32; 3],
}

impl PbrMaterial {
    /// Creates a non-emissive material.
    ///
    /// # Example
    ///
    /// ```rust
    /// use frame_mesh::PbrMaterial;
    ///
    /// let steel = PbrMaterial::new("steel", [0.7, 0.7, 0.7, 1.0], 0.9, 0.3);
    /// assert_eq!(steel.emissive, [0.0; 3]);
    /// ```
    pub fn new(name: impl Into<String>, base_color: [f32; 4], metallic: f32, roughness: f32) -> Self {
        Self {
            name: name.into(),
            base_color,
            metallic,
            roughness,
            emissive: [0.0; 3],
        }
    }
}
