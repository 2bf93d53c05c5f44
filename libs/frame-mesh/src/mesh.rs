//! # Mesh Data Structure
//!
//! Indexed triangle mesh: a position list plus index triples into it.
//! Frame geometry is only ever built by concatenating primitives, so the
//! mesh never welds, deduplicates or reorders anything.

use crate::error::MeshError;
use config::constants::{AREA_EPSILON, MAX_TRIANGLES, MAX_VERTICES};
use glam::DVec3;

/// Indexed triangle mesh in f64.
///
/// Positions stay in f64 through layout and merging; [`Mesh::vertices_f32`]
/// narrows them when a buffer is written.
///
/// # Example
///
/// ```rust
/// use frame_mesh::Mesh;
/// use glam::DVec3;
///
/// let mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
/// assert_eq!(mesh.triangle_count(), 1);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    /// Counter-clockwise seen from outside
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing buffers. Nothing is checked; call [`Mesh::validate`].
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Concatenates meshes into one, offsetting triangle indices.
    ///
    /// No vertices are shared or deduplicated between the inputs; touching
    /// or overlapping parts simply coexist in the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use frame_mesh::{primitives::create_cuboid, Mesh};
    /// use glam::DVec3;
    ///
    /// let a = create_cuboid(DVec3::ONE, true).unwrap();
    /// let b = create_cuboid(DVec3::ONE, false).unwrap();
    /// let merged = Mesh::concatenate([&a, &b]);
    /// assert_eq!(merged.vertex_count(), 16);
    /// assert_eq!(merged.triangles()[12], [8, 10, 9]);
    /// ```
    pub fn concatenate<'a, I>(meshes: I) -> Mesh
    where
        I: IntoIterator<Item = &'a Mesh>,
        I::IntoIter: Clone,
    {
        let parts = meshes.into_iter();
        let (vertex_total, triangle_total) = parts
            .clone()
            .fold((0, 0), |(v, t), m| (v + m.vertex_count(), t + m.triangle_count()));

        let mut combined = Mesh {
            vertices: Vec::with_capacity(vertex_total),
            triangles: Vec::with_capacity(triangle_total),
        };
        for part in parts {
            combined.merge(part);
        }
        combined
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Axis-aligned bounds as `(min, max)`; both zero for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
    }

    /// Moves every vertex by `offset`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use frame_mesh::primitives::create_cuboid;
    /// use glam::DVec3;
    ///
    /// let mut column = create_cuboid(DVec3::new(0.3, 0.3, 2.8), true).unwrap();
    /// column.translate(DVec3::new(1.85, 1.85, 1.6));
    /// assert!((column.bounding_box().1.z - 3.0).abs() < 1e-12);
    /// ```
    pub fn translate(&mut self, offset: DVec3) {
        self.vertices.iter_mut().for_each(|v| *v += offset);
    }

    /// Appends `other`, shifting its indices past the existing vertices.
    pub fn merge(&mut self, other: &Mesh) {
        let base = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles
            .extend(other.triangles.iter().map(|tri| tri.map(|i| i + base)));
    }

    /// Structural checks run before export.
    ///
    /// Rejects non-finite positions, indices past the vertex list, triangles
    /// that reuse a vertex and triangles with near-zero area.
    pub fn validate(&self) -> Result<(), MeshError> {
        if let Some(index) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(MeshError::validation(format!(
                "vertex {index} is not finite: {:?}",
                self.vertices[index]
            )));
        }

        let len = self.vertices.len();
        for (index, &tri) in self.triangles.iter().enumerate() {
            let [a, b, c] = tri.map(|i| i as usize);
            if a >= len || b >= len || c >= len {
                return Err(MeshError::validation(format!(
                    "triangle {index} references a missing vertex: {tri:?}"
                )));
            }
            if a == b || b == c || a == c {
                return Err(MeshError::validation(format!(
                    "triangle {index} repeats a vertex: {tri:?}"
                )));
            }

            let [pa, pb, pc] = [a, b, c].map(|i| self.vertices[i]);
            if (pb - pa).cross(pc - pa).length() < AREA_EPSILON {
                return Err(MeshError::validation(format!(
                    "triangle {index} has zero area"
                )));
            }
        }

        Ok(())
    }

    /// Fails when the mesh exceeds [`MAX_VERTICES`] or [`MAX_TRIANGLES`].
    pub fn check_limits(&self) -> Result<(), MeshError> {
        if self.vertex_count() > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: self.vertex_count(),
                max: MAX_VERTICES,
            });
        }
        if self.triangle_count() > MAX_TRIANGLES {
            return Err(MeshError::TooManyTriangles {
                count: self.triangle_count(),
                max: MAX_TRIANGLES,
            });
        }
        Ok(())
    }

    /// Positions narrowed to f32, flattened as `x, y, z, x, y, z, ...`.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.as_vec3().to_array())
            .collect()
    }

    /// Triangle indices flattened in emission order.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.concat()
    }
}
