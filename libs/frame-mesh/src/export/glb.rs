//! # GLB Export
//!
//! Writes a mesh and its material as a binary glTF 2.0 container.
//!
//! ## Layout
//!
//! ```text
//! header   magic "glTF" | version 2 | total length
//! chunk 0  JSON  document (padded with spaces to 4 bytes)
//! chunk 1  BIN   f32 positions followed by u32 indices
//! ```
//!
//! The document holds one scene with one node, one mesh with a single
//! indexed triangle primitive, and one metallic-roughness material. All
//! integers and floats are little-endian.

use std::collections::BTreeMap;

use crate::error::MeshError;
use crate::material::PbrMaterial;
use crate::mesh::Mesh;
use serde::Serialize;

/// "glTF" in little-endian byte order.
pub const GLB_MAGIC: u32 = 0x4654_6C67;
/// Container version written to the header.
pub const GLB_VERSION: u32 = 2;

const CHUNK_JSON: u32 = 0x4E4F_534A;
const CHUNK_BIN: u32 = 0x004E_4942;
const HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

const COMPONENT_FLOAT: u32 = 5126;
const COMPONENT_UNSIGNED_INT: u32 = 5125;
const TARGET_ARRAY_BUFFER: u32 = 34962;
const TARGET_ELEMENT_ARRAY_BUFFER: u32 = 34963;
const MODE_TRIANGLES: u32 = 4;

/// Names written into the exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlbOptions {
    /// Name of the single mesh and node.
    pub mesh_name: String,
    /// Value of `asset.generator`.
    pub generator: String,
}

impl Default for GlbOptions {
    fn default() -> Self {
        Self {
            mesh_name: "mesh".to_string(),
            generator: concat!("frame-mesh ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Serializes a mesh with one material into GLB bytes using default names.
///
/// # Errors
///
/// Fails for an empty mesh, when the JSON document cannot be serialized, or
/// when the payload does not fit the 32-bit GLB length fields.
pub fn write_glb(mesh: &Mesh, material: &PbrMaterial) -> Result<Vec<u8>, MeshError> {
    write_glb_with(mesh, material, &GlbOptions::default())
}

/// Serializes a mesh with one material into GLB bytes.
///
/// # Example
///
/// ```rust
/// use frame_mesh::export::{write_glb_with, GlbOptions};
/// use frame_mesh::{primitives::create_cuboid, PbrMaterial};
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::ONE, true).unwrap();
/// let material = PbrMaterial::new("default", [0.5, 0.5, 0.5, 1.0], 0.5, 0.5);
/// let options = GlbOptions { mesh_name: "box".into(), ..GlbOptions::default() };
/// let glb = write_glb_with(&mesh, &material, &options).unwrap();
/// assert_eq!(glb.len() % 4, 0);
/// ```
pub fn write_glb_with(
    mesh: &Mesh,
    material: &PbrMaterial,
    options: &GlbOptions,
) -> Result<Vec<u8>, MeshError> {
    if mesh.is_empty() || mesh.triangle_count() == 0 {
        return Err(MeshError::EmptyMesh);
    }

    let positions = mesh.vertices_f32();
    let indices = mesh.indices_u32();

    let mut bin = Vec::with_capacity((positions.len() + indices.len()) * 4);
    bin.extend(positions.iter().flat_map(|p| p.to_le_bytes()));
    let positions_len = bin.len();
    bin.extend(indices.iter().flat_map(|i| i.to_le_bytes()));
    let indices_len = bin.len() - positions_len;

    let (min, max) = mesh.bounding_box();
    let document = Document {
        asset: Asset {
            version: "2.0",
            generator: &options.generator,
        },
        scene: 0,
        scenes: [Scene { nodes: [0] }],
        nodes: [Node {
            mesh: 0,
            name: &options.mesh_name,
        }],
        meshes: [MeshDef {
            name: &options.mesh_name,
            primitives: [Primitive {
                attributes: BTreeMap::from([("POSITION", 0)]),
                indices: 1,
                material: 0,
                mode: MODE_TRIANGLES,
            }],
        }],
        materials: [MaterialDef {
            name: &material.name,
            pbr_metallic_roughness: PbrMetallicRoughness {
                base_color_factor: material.base_color,
                metallic_factor: material.metallic,
                roughness_factor: material.roughness,
            },
            emissive_factor: material.emissive,
        }],
        accessors: [
            Accessor {
                buffer_view: 0,
                byte_offset: 0,
                component_type: COMPONENT_FLOAT,
                count: mesh.vertex_count(),
                kind: "VEC3",
                min: Some([min.x as f32, min.y as f32, min.z as f32]),
                max: Some([max.x as f32, max.y as f32, max.z as f32]),
            },
            Accessor {
                buffer_view: 1,
                byte_offset: 0,
                component_type: COMPONENT_UNSIGNED_INT,
                count: indices.len(),
                kind: "SCALAR",
                min: None,
                max: None,
            },
        ],
        buffer_views: [
            BufferView {
                buffer: 0,
                byte_offset: 0,
                byte_length: positions_len,
                target: TARGET_ARRAY_BUFFER,
            },
            BufferView {
                buffer: 0,
                byte_offset: positions_len,
                byte_length: indices_len,
                target: TARGET_ELEMENT_ARRAY_BUFFER,
            },
        ],
        buffers: [Buffer {
            byte_length: bin.len(),
        }],
    };

    let mut json = serde_json::to_vec(&document)?;
    pad_to_four(&mut json, b' ');
    pad_to_four(&mut bin, 0);

    let total = HEADER_LEN + 2 * CHUNK_HEADER_LEN + json.len() + bin.len();
    let total_u32 = u32::try_from(total).map_err(|_| MeshError::PayloadTooLarge { size: total })?;

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    out.extend_from_slice(&GLB_VERSION.to_le_bytes());
    out.extend_from_slice(&total_u32.to_le_bytes());
    push_chunk(&mut out, CHUNK_JSON, &json);
    push_chunk(&mut out, CHUNK_BIN, &bin);

    log::debug!(
        "GLB export: {} vertices, {} triangles, {} bytes (json {}, bin {})",
        mesh.vertex_count(),
        mesh.triangle_count(),
        out.len(),
        json.len(),
        bin.len()
    );

    Ok(out)
}

fn pad_to_four(bytes: &mut Vec<u8>, fill: u8) {
    let padded = bytes.len().next_multiple_of(4);
    bytes.resize(padded, fill);
}

/// Chunk lengths fit in u32 because the total was checked first.
fn push_chunk(out: &mut Vec<u8>, kind: u32, data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(&kind.to_le_bytes());
    out.extend_from_slice(data);
}

// =============================================================================
// glTF JSON DOCUMENT
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    asset: Asset<'a>,
    scene: u32,
    scenes: [Scene; 1],
    nodes: [Node<'a>; 1],
    meshes: [MeshDef<'a>; 1],
    materials: [MaterialDef<'a>; 1],
    accessors: [Accessor; 2],
    buffer_views: [BufferView; 2],
    buffers: [Buffer; 1],
}

#[derive(Serialize)]
struct Asset<'a> {
    version: &'static str,
    generator: &'a str,
}

#[derive(Serialize)]
struct Scene {
    nodes: [u32; 1],
}

#[derive(Serialize)]
struct Node<'a> {
    mesh: u32,
    name: &'a str,
}

#[derive(Serialize)]
struct MeshDef<'a> {
    name: &'a str,
    primitives: [Primitive; 1],
}

#[derive(Serialize)]
struct Primitive {
    attributes: BTreeMap<&'static str, u32>,
    indices: u32,
    material: u32,
    mode: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaterialDef<'a> {
    name: &'a str,
    pbr_metallic_roughness: PbrMetallicRoughness,
    emissive_factor: [f32; 3],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PbrMetallicRoughness {
    base_color_factor: [f32; 4],
    metallic_factor: f32,
    roughness_factor: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Accessor {
    buffer_view: u32,
    byte_offset: usize,
    component_type: u32,
    count: usize,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<[f32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<[f32; 3]>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BufferView {
    buffer: u32,
    byte_offset: usize,
    byte_length: usize,
    target: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Buffer {
    byte_length: usize,
}
