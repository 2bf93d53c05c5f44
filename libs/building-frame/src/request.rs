//! # Generation Requests
//!
//! Raw caller input and its clamped, normalized form.

use config::constants::{
    DEFAULT_FLOORS, DEFAULT_MATERIAL, DEFAULT_SLAB_THICKNESS, MIN_FLOORS, MIN_SLAB_THICKNESS,
};

/// Parameters exactly as a caller supplied them.
///
/// Nothing is validated here; see [`FrameParams::from_request`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRequest {
    /// Material key, compared against `wood`, `steel` and `concrete`.
    pub material: String,
    /// Requested floor count. Values below one are clamped up.
    pub num_floors: i64,
    /// Requested slab thickness. Values below the minimum are clamped up.
    pub slab_thickness: f64,
}

impl FrameRequest {
    /// Creates a request from the three generator inputs.
    pub fn new(material: impl Into<String>, num_floors: i64, slab_thickness: f64) -> Self {
        Self {
            material: material.into(),
            num_floors,
            slab_thickness,
        }
    }
}

impl Default for FrameRequest {
    fn default() -> Self {
        Self {
            material: DEFAULT_MATERIAL.to_string(),
            num_floors: DEFAULT_FLOORS as i64,
            slab_thickness: DEFAULT_SLAB_THICKNESS,
        }
    }
}

/// Normalized parameters the layout is built from.
///
/// # Example
///
/// ```rust
/// use building_frame::{FrameParams, FrameRequest};
///
/// let params = FrameParams::from_request(&FrameRequest::new("steel", -3, 0.0));
/// assert_eq!(params.num_floors, 1);
/// assert_eq!(params.slab_thickness, 0.05);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FrameParams {
    /// Material key as requested (lookup happens separately).
    pub material: String,
    /// Floor count, at least [`MIN_FLOORS`].
    pub num_floors: u32,
    /// Slab thickness, at least [`MIN_SLAB_THICKNESS`].
    pub slab_thickness: f64,
}

impl FrameParams {
    /// Clamps a request into valid parameters. Never fails.
    ///
    /// Floor counts beyond `u32::MAX` saturate; the mesh limits reject such
    /// frames long before that matters. A NaN thickness becomes the minimum.
    pub fn from_request(request: &FrameRequest) -> Self {
        let num_floors = request
            .num_floors
            .clamp(MIN_FLOORS as i64, u32::MAX as i64) as u32;
        // f64::max ignores NaN
        let slab_thickness = request.slab_thickness.max(MIN_SLAB_THICKNESS);

        if num_floors as i64 != request.num_floors {
            log::debug!("num_floors {} clamped to {num_floors}", request.num_floors);
        }
        if slab_thickness != request.slab_thickness {
            log::debug!(
                "slab_thickness {} clamped to {slab_thickness}",
                request.slab_thickness
            );
        }

        Self {
            material: request.material.clone(),
            num_floors,
            slab_thickness,
        }
    }
}
