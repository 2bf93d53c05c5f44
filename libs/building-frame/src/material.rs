//! # Frame Materials
//!
//! The closed set of appearances a frame can be rendered with.
//!
//! | Key        | Base color               | Metallic | Roughness |
//! |------------|--------------------------|----------|-----------|
//! | `wood`     | 0.6, 0.4, 0.2, 1.0       | 0.0      | 0.8       |
//! | `steel`    | 0.7, 0.7, 0.7, 1.0       | 0.9      | 0.3       |
//! | `concrete` | 0.55, 0.55, 0.55, 1.0    | 0.05     | 0.9       |
//! | other      | 0.5, 0.5, 0.5, 1.0       | 0.5      | 0.5       |

use std::fmt;

use frame_mesh::PbrMaterial;

/// Appearance of the whole frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameMaterial {
    Wood,
    Steel,
    Concrete,
    /// Neutral gray used for unrecognized keys.
    Default,
}

/// How unrecognized material keys are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaterialPolicy {
    /// Unknown keys render with [`FrameMaterial::Default`].
    #[default]
    Permissive,
    /// Unknown keys fail generation.
    Strict,
}

impl FrameMaterial {
    /// Materials selectable by key.
    pub const NAMED: [FrameMaterial; 3] = [Self::Wood, Self::Steel, Self::Concrete];

    /// Looks up a key. Total: every input yields a material.
    ///
    /// Keys are matched exactly, so `"Steel"` is not `"steel"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use building_frame::FrameMaterial;
    ///
    /// assert_eq!(FrameMaterial::from_key("steel"), FrameMaterial::Steel);
    /// assert_eq!(FrameMaterial::from_key("granite"), FrameMaterial::Default);
    /// ```
    pub fn from_key(key: &str) -> Self {
        Self::lookup(key).unwrap_or(Self::Default)
    }

    /// Looks up a key, returning `None` for anything outside the named set.
    pub fn lookup(key: &str) -> Option<Self> {
        Self::NAMED.into_iter().find(|m| m.key() == key)
    }

    /// Key of the material, `"default"` for the fallback.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Steel => "steel",
            Self::Concrete => "concrete",
            Self::Default => "default",
        }
    }

    /// Linear RGBA base color.
    pub fn base_color(&self) -> [f32; 4] {
        match self {
            Self::Wood => [0.6, 0.4, 0.2, 1.0],
            Self::Steel => [0.7, 0.7, 0.7, 1.0],
            Self::Concrete => [0.55, 0.55, 0.55, 1.0],
            Self::Default => [0.5, 0.5, 0.5, 1.0],
        }
    }

    /// Metallic factor.
    pub fn metallic(&self) -> f32 {
        match self {
            Self::Wood => 0.0,
            Self::Steel => 0.9,
            Self::Concrete => 0.05,
            Self::Default => 0.5,
        }
    }

    /// Roughness factor.
    pub fn roughness(&self) -> f32 {
        match self {
            Self::Wood => 0.8,
            Self::Steel => 0.3,
            Self::Concrete => 0.9,
            Self::Default => 0.5,
        }
    }

    /// Export description with zero emission.
    pub fn to_pbr(&self) -> PbrMaterial {
        PbrMaterial::new(self.key(), self.base_color(), self.metallic(), self.roughness())
    }
}

impl fmt::Display for FrameMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
