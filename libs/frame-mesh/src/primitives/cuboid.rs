//! # Cuboid Primitive
//!
//! Axis-aligned rectangular box, the only solid a frame is built from.
//!
//! Corners are numbered bottom ring first, then top ring, each ring going
//! `(min.x, min.y) → (max.x, min.y) → (max.x, max.y) → (min.x, max.y)`.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Vertices in every cuboid mesh.
pub const CUBOID_VERTICES: usize = 8;

/// Triangles in every cuboid mesh (two per face).
pub const CUBOID_TRIANGLES: usize = 12;

/// Ring order of the four corners in the XY plane (`true` = max side).
const RING: [(bool, bool); 4] = [(false, false), (true, false), (true, true), (false, true)];

/// Outward-facing triangles, counter-clockwise seen from outside.
const FACES: [[u32; 3]; CUBOID_TRIANGLES] = [
    [0, 2, 1], // -z
    [0, 3, 2],
    [4, 5, 6], // +z
    [4, 6, 7],
    [0, 1, 5], // -y
    [0, 5, 4],
    [2, 3, 7], // +y
    [2, 7, 6],
    [3, 0, 4], // -x
    [3, 4, 7],
    [1, 2, 6], // +x
    [1, 6, 5],
];

/// Creates an axis-aligned box mesh.
///
/// With `center` the box is centered on the origin; otherwise its minimum
/// corner sits on the origin.
///
/// # Errors
///
/// [`MeshError::DegenerateGeometry`] when any extent is zero, negative or
/// not finite.
///
/// # Example
///
/// ```rust
/// use frame_mesh::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let slab = create_cuboid(DVec3::new(4.0, 4.0, 0.2), true).unwrap();
/// assert_eq!(slab.vertex_count(), 8);
/// assert_eq!(slab.triangle_count(), 12);
/// ```
pub fn create_cuboid(extents: DVec3, center: bool) -> Result<Mesh, MeshError> {
    if !extents.is_finite() || extents.min_element() <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cuboid extents must be positive and finite: {extents:?}"
        )));
    }

    let (lo, hi) = if center {
        (-extents / 2.0, extents / 2.0)
    } else {
        (DVec3::ZERO, extents)
    };

    let vertices = [lo.z, hi.z]
        .into_iter()
        .flat_map(|z| {
            RING.map(|(max_x, max_y)| {
                DVec3::new(
                    if max_x { hi.x } else { lo.x },
                    if max_y { hi.y } else { lo.y },
                    z,
                )
            })
        })
        .collect();

    Ok(Mesh::from_parts(vertices, FACES.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners(mesh: &Mesh, tri: [u32; 3]) -> [DVec3; 3] {
        tri.map(|i| mesh.vertices()[i as usize])
    }

    #[test]
    fn counts_match_constants() {
        let mesh = create_cuboid(DVec3::splat(10.0), false).unwrap();
        assert_eq!(mesh.vertex_count(), CUBOID_VERTICES);
        assert_eq!(mesh.triangle_count(), CUBOID_TRIANGLES);
    }

    #[test]
    fn corner_anchored_at_origin() {
        let mesh = create_cuboid(DVec3::new(3.7, 0.3, 0.3), false).unwrap();
        assert_eq!(
            mesh.bounding_box(),
            (DVec3::ZERO, DVec3::new(3.7, 0.3, 0.3))
        );
    }

    #[test]
    fn centered_on_origin() {
        let mesh = create_cuboid(DVec3::new(4.0, 4.0, 0.2), true).unwrap();
        let (lo, hi) = mesh.bounding_box();
        assert_eq!(lo, DVec3::new(-2.0, -2.0, -0.1));
        assert_eq!(hi, DVec3::new(2.0, 2.0, 0.1));
    }

    #[test]
    fn ring_order() {
        let mesh = create_cuboid(DVec3::ONE, false).unwrap();
        assert_eq!(mesh.vertices()[0], DVec3::ZERO);
        assert_eq!(mesh.vertices()[2], DVec3::new(1.0, 1.0, 0.0));
        assert_eq!(mesh.vertices()[6], DVec3::ONE);
    }

    #[test]
    fn passes_validation() {
        assert!(create_cuboid(DVec3::splat(0.3), true).unwrap().validate().is_ok());
    }

    #[test]
    fn normals_point_outward() {
        let mesh = create_cuboid(DVec3::new(1.0, 2.0, 3.0), true).unwrap();
        for &tri in mesh.triangles() {
            let [a, b, c] = corners(&mesh, tri);
            let normal = (b - a).cross(c - a);
            // Centered box: the face centroid points away from the origin
            assert!(normal.dot(a + b + c) > 0.0, "{tri:?}");
        }
    }

    #[test]
    fn rejects_zero_extent() {
        assert!(create_cuboid(DVec3::new(0.0, 10.0, 10.0), false).is_err());
    }

    #[test]
    fn rejects_negative_extent() {
        // Column under a slab thicker than the story
        let err = create_cuboid(DVec3::new(0.3, 0.3, -0.5), true).unwrap_err();
        assert!(matches!(err, MeshError::DegenerateGeometry { .. }));
    }

    #[test]
    fn rejects_non_finite_extent() {
        assert!(create_cuboid(DVec3::new(4.0, 4.0, f64::INFINITY), true).is_err());
        assert!(create_cuboid(DVec3::new(4.0, f64::NAN, 0.2), true).is_err());
    }
}
