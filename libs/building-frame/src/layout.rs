//! # Frame Layout
//!
//! Places the structural boxes of every floor in a shared Z-up coordinate
//! space. Each floor contributes one slab, four corner columns and four
//! beams at the top of the columns:
//!
//! ```text
//!   z = i*story + story  ┌──beam──┐   beams centered story - beam_height/2
//!                        │        │
//!                      column   column   height = story - slab
//!                        │        │
//!   z = i*story + slab   ├────────┤
//!   z = i*story          └──slab──┘
//! ```
//!
//! Slabs are centered on the Z axis; column and beam centers sit at
//! `(±dx, ±dy)` with `dx = floor_width/2 - column_dim/2` (and likewise `dy`).

use config::constants::FrameDimensions;
use frame_mesh::primitives::{create_cuboid, CUBOID_TRIANGLES, CUBOID_VERTICES};
use frame_mesh::{Mesh, MeshError};
use glam::DVec3;

use crate::request::FrameParams;

/// Boxes emitted for every floor: 1 slab, 4 columns, 4 beams.
pub const BOXES_PER_FLOOR: usize = 9;

/// Role of a box within the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralUnit {
    Slab,
    Column,
    Beam,
}

/// An axis-aligned box with its placement.
///
/// The box is created centered at the origin and translated once to
/// `center`; it is never rotated or changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    unit: StructuralUnit,
    floor: u32,
    extents: DVec3,
    center: DVec3,
}

impl Primitive {
    fn new(unit: StructuralUnit, floor: u32, extents: DVec3, center: DVec3) -> Self {
        Self {
            unit,
            floor,
            extents,
            center,
        }
    }

    /// Structural role.
    pub fn unit(&self) -> StructuralUnit {
        self.unit
    }

    /// Index of the floor this box belongs to.
    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// Width, depth and height.
    pub fn extents(&self) -> DVec3 {
        self.extents
    }

    /// Translation applied after creation.
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Minimum corner.
    pub fn min(&self) -> DVec3 {
        self.center - self.extents / 2.0
    }

    /// Maximum corner.
    pub fn max(&self) -> DVec3 {
        self.center + self.extents / 2.0
    }

    /// Z of the bottom face.
    pub fn bottom(&self) -> f64 {
        self.min().z
    }

    /// Z of the top face.
    pub fn top(&self) -> f64 {
        self.max().z
    }

    /// Builds the translated box mesh.
    ///
    /// # Errors
    ///
    /// Fails when any extent is non-positive or not finite, e.g. a column
    /// whose slab is as thick as the story.
    pub fn to_mesh(&self) -> Result<Mesh, MeshError> {
        let mut mesh = create_cuboid(self.extents, true)?;
        mesh.translate(self.center);
        Ok(mesh)
    }
}

/// Per-role primitive counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitCounts {
    pub slabs: usize,
    pub columns: usize,
    pub beams: usize,
}

impl UnitCounts {
    /// Tallies primitives by role.
    pub fn of(primitives: &[Primitive]) -> Self {
        primitives
            .iter()
            .fold(Self::default(), |mut counts, p| {
                match p.unit {
                    StructuralUnit::Slab => counts.slabs += 1,
                    StructuralUnit::Column => counts.columns += 1,
                    StructuralUnit::Beam => counts.beams += 1,
                }
                counts
            })
    }

    /// Sum over all roles.
    pub fn total(&self) -> usize {
        self.slabs + self.columns + self.beams
    }
}

/// Vertex and triangle counts of a merged frame, computed without building it.
///
/// # Example
///
/// ```rust
/// use building_frame::layout::frame_mesh_size;
///
/// assert_eq!(frame_mesh_size(1), (72, 108));
/// assert_eq!(frame_mesh_size(3), (216, 324));
/// ```
pub fn frame_mesh_size(num_floors: u32) -> (usize, usize) {
    let boxes = (num_floors as usize).saturating_mul(BOXES_PER_FLOOR);
    (
        boxes.saturating_mul(CUBOID_VERTICES),
        boxes.saturating_mul(CUBOID_TRIANGLES),
    )
}

/// Lays out the nine boxes of one floor.
///
/// Order: slab, columns at `(+dx,+dy) (-dx,+dy) (+dx,-dy) (-dx,-dy)`, then
/// X-spanning beams at `+dy, -dy` and Y-spanning beams at `+dx, -dx`.
pub fn layout_floor(
    index: u32,
    slab_thickness: f64,
    dims: &FrameDimensions,
) -> [Primitive; BOXES_PER_FLOOR] {
    let floor_z_bottom = f64::from(index) * dims.story_height;
    let dx = dims.column_offset_x();
    let dy = dims.column_offset_y();

    let slab = Primitive::new(
        StructuralUnit::Slab,
        index,
        DVec3::new(dims.floor_width, dims.floor_depth, slab_thickness),
        DVec3::new(0.0, 0.0, floor_z_bottom + slab_thickness / 2.0),
    );

    let column_height = dims.story_height - slab_thickness;
    let column_extents = DVec3::new(dims.column_dim, dims.column_dim, column_height);
    let column_z = floor_z_bottom + slab_thickness + column_height / 2.0;
    let column = |x: f64, y: f64| {
        Primitive::new(
            StructuralUnit::Column,
            index,
            column_extents,
            DVec3::new(x, y, column_z),
        )
    };

    let beam_z = floor_z_bottom + dims.story_height - dims.beam_height / 2.0;
    let beam_x_extents = DVec3::new(
        dims.floor_width - dims.column_dim,
        dims.beam_width,
        dims.beam_height,
    );
    let beam_y_extents = DVec3::new(
        dims.beam_width,
        dims.floor_depth - dims.column_dim,
        dims.beam_height,
    );
    let beam = |extents: DVec3, x: f64, y: f64| {
        Primitive::new(StructuralUnit::Beam, index, extents, DVec3::new(x, y, beam_z))
    };

    [
        slab,
        column(dx, dy),
        column(-dx, dy),
        column(dx, -dy),
        column(-dx, -dy),
        beam(beam_x_extents, 0.0, dy),
        beam(beam_x_extents, 0.0, -dy),
        beam(beam_y_extents, dx, 0.0),
        beam(beam_y_extents, -dx, 0.0),
    ]
}

/// Lays out every floor of the frame, bottom to top.
///
/// Beams are emitted on every floor, the top one included.
pub fn layout_frame(params: &FrameParams, dims: &FrameDimensions) -> Vec<Primitive> {
    let mut primitives = Vec::with_capacity(params.num_floors as usize * BOXES_PER_FLOOR);
    for index in 0..params.num_floors {
        primitives.extend(layout_floor(index, params.slab_thickness, dims));
    }
    log::debug!(
        "laid out {} floors as {} primitives",
        params.num_floors,
        primitives.len()
    );
    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::STORY_HEIGHT;

    fn params(num_floors: u32, slab_thickness: f64) -> FrameParams {
        FrameParams {
            material: "wood".into(),
            num_floors,
            slab_thickness,
        }
    }

    #[test]
    fn floor_has_one_slab_four_columns_four_beams() {
        let floor = layout_floor(0, 0.2, &FrameDimensions::default());
        let counts = UnitCounts::of(&floor);
        assert_eq!(
            counts,
            UnitCounts {
                slabs: 1,
                columns: 4,
                beams: 4
            }
        );
    }

    #[test]
    fn slab_sits_on_floor_bottom() {
        let floor = layout_floor(2, 0.2, &FrameDimensions::default());
        let slab = floor[0];
        assert_eq!(slab.unit(), StructuralUnit::Slab);
        assert_eq!(slab.extents(), DVec3::new(4.0, 4.0, 0.2));
        assert_eq!(slab.center().x, 0.0);
        assert_eq!(slab.center().y, 0.0);
        assert_relative_eq!(slab.bottom(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(slab.center().z, 6.1, epsilon = 1e-12);
    }

    #[test]
    fn columns_stand_on_slab_at_corners() {
        let floor = layout_floor(0, 0.2, &FrameDimensions::default());
        let slab_top = floor[0].top();
        let corners: Vec<(f64, f64)> = floor[1..5]
            .iter()
            .map(|c| (c.center().x, c.center().y))
            .collect();
        assert_eq!(
            corners,
            vec![(1.85, 1.85), (-1.85, 1.85), (1.85, -1.85), (-1.85, -1.85)]
        );
        for column in &floor[1..5] {
            assert_eq!(column.unit(), StructuralUnit::Column);
            assert_relative_eq!(column.extents().z, 2.8, epsilon = 1e-12);
            assert_relative_eq!(column.bottom(), slab_top, epsilon = 1e-12);
        }
    }

    #[test]
    fn beams_span_both_axes_at_column_tops() {
        let floor = layout_floor(0, 0.2, &FrameDimensions::default());
        let beams = &floor[5..];
        for beam in &beams[..2] {
            assert_relative_eq!(beam.extents().x, 3.7, epsilon = 1e-12);
            assert_eq!(beam.extents().y, 0.3);
        }
        for beam in &beams[2..] {
            assert_eq!(beam.extents().x, 0.3);
            assert_relative_eq!(beam.extents().y, 3.7, epsilon = 1e-12);
        }
        assert_eq!(beams[0].center().y, 1.85);
        assert_eq!(beams[1].center().y, -1.85);
        assert_eq!(beams[2].center().x, 1.85);
        assert_eq!(beams[3].center().x, -1.85);
        for beam in beams {
            assert_relative_eq!(beam.center().z, 2.85, epsilon = 1e-12);
            assert_relative_eq!(beam.top(), STORY_HEIGHT, epsilon = 1e-12);
        }
    }

    #[test]
    fn column_tops_meet_next_slab_for_any_thickness() {
        let dims = FrameDimensions::default();
        for thickness in [0.05, 0.2, 0.5, 1.3, 2.9] {
            let frame = layout_frame(&params(4, thickness), &dims);
            for column in frame.iter().filter(|p| p.unit() == StructuralUnit::Column) {
                let expected = f64::from(column.floor() + 1) * STORY_HEIGHT;
                assert_relative_eq!(column.top(), expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn frame_repeats_floor_pattern() {
        let frame = layout_frame(&params(5, 0.2), &FrameDimensions::default());
        assert_eq!(frame.len(), 5 * BOXES_PER_FLOOR);
        let counts = UnitCounts::of(&frame);
        assert_eq!((counts.slabs, counts.columns, counts.beams), (5, 20, 20));
        assert_eq!(counts.total(), 45);
        assert!(frame
            .chunks(BOXES_PER_FLOOR)
            .enumerate()
            .all(|(i, floor)| floor.iter().all(|p| p.floor() == i as u32)));
    }

    #[test]
    fn top_floor_keeps_its_beams() {
        let frame = layout_frame(&params(3, 0.2), &FrameDimensions::default());
        let top_beams = frame
            .iter()
            .filter(|p| p.floor() == 2 && p.unit() == StructuralUnit::Beam)
            .count();
        assert_eq!(top_beams, 4);
    }

    #[test]
    fn primitive_mesh_matches_bounds() {
        let floor = layout_floor(1, 0.2, &FrameDimensions::default());
        for primitive in floor {
            let mesh = primitive.to_mesh().unwrap();
            let (min, max) = mesh.bounding_box();
            assert_relative_eq!(min.z, primitive.bottom(), epsilon = 1e-12);
            assert_relative_eq!(max.x, primitive.max().x, epsilon = 1e-12);
        }
    }

    #[test]
    fn slab_as_thick_as_story_cannot_be_meshed() {
        let floor = layout_floor(0, STORY_HEIGHT, &FrameDimensions::default());
        assert!(floor[1].to_mesh().is_err());
    }
}
