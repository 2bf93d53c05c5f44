//! GLB output read back through the `gltf` crate.

use approx::assert_relative_eq;
use frame_mesh::export::write_glb;
use frame_mesh::primitives::create_cuboid;
use frame_mesh::{Mesh, PbrMaterial};
use glam::DVec3;

fn two_boxes() -> Mesh {
    let a = create_cuboid(DVec3::new(1.0, 2.0, 3.0), true).unwrap();
    let mut b = create_cuboid(DVec3::splat(0.5), true).unwrap();
    b.translate(DVec3::new(5.0, 0.0, 1.0));
    Mesh::concatenate([&a, &b])
}

#[test]
fn reader_accepts_document() {
    let material = PbrMaterial::new("concrete", [0.55, 0.55, 0.55, 1.0], 0.05, 0.9);
    let glb = write_glb(&two_boxes(), &material).unwrap();

    let gltf = gltf::Gltf::from_slice(&glb).expect("valid GLB");
    assert_eq!(gltf.scenes().count(), 1);
    assert_eq!(gltf.nodes().count(), 1);
    assert_eq!(gltf.meshes().count(), 1);
    assert_eq!(gltf.materials().count(), 1);
    assert_eq!(gltf.animations().count(), 0);
    assert_eq!(gltf.skins().count(), 0);
    assert!(gltf.blob.is_some());
}

#[test]
fn reader_recovers_geometry() {
    let mesh = two_boxes();
    let material = PbrMaterial::new("steel", [0.7, 0.7, 0.7, 1.0], 0.9, 0.3);
    let glb = write_glb(&mesh, &material).unwrap();

    let gltf = gltf::Gltf::from_slice(&glb).unwrap();
    let blob = gltf.blob.as_deref().unwrap();
    let primitive = gltf.meshes().next().unwrap().primitives().next().unwrap();
    assert_eq!(primitive.mode(), gltf::mesh::Mode::Triangles);

    let reader = primitive.reader(|_| Some(blob));
    let positions: Vec<[f32; 3]> = reader.read_positions().unwrap().collect();
    let indices: Vec<u32> = reader.read_indices().unwrap().into_u32().collect();

    assert_eq!(positions.len(), mesh.vertex_count());
    assert_eq!(indices, mesh.indices_u32());
    for (read, original) in positions.iter().zip(mesh.vertices()) {
        assert_relative_eq!(read[0], original.x as f32);
        assert_relative_eq!(read[1], original.y as f32);
        assert_relative_eq!(read[2], original.z as f32);
    }
}

#[test]
fn reader_recovers_material() {
    let material = PbrMaterial::new("wood", [0.6, 0.4, 0.2, 1.0], 0.0, 0.8);
    let glb = write_glb(&two_boxes(), &material).unwrap();

    let gltf = gltf::Gltf::from_slice(&glb).unwrap();
    let read = gltf.materials().next().unwrap();
    let pbr = read.pbr_metallic_roughness();

    assert_eq!(read.name(), Some("wood"));
    assert_eq!(pbr.base_color_factor(), [0.6, 0.4, 0.2, 1.0]);
    assert_eq!(pbr.metallic_factor(), 0.0);
    assert_eq!(pbr.roughness_factor(), 0.8);
    assert_eq!(read.emissive_factor(), [0.0, 0.0, 0.0]);
}
