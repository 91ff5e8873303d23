// Host-side tests for mesh generation and GLB flattening.

#![allow(dead_code)]
mod error {
    include!("../src/error.rs");
}
mod core {
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
}

use crate::core::mesh::*;
use error::LoadError;
use glam::Vec3;

/// Minimal GLB: one triangle in the BIN chunk, optionally under a node
/// with `translation`.
fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let mut json = json.as_bytes().to_vec();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    let mut bin = bin.to_vec();
    while bin.len() % 4 != 0 {
        bin.push(0);
    }
    let bin_chunk = if bin.is_empty() { 0 } else { 8 + bin.len() };
    let total = 12 + 8 + json.len() + bin_chunk;

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json);
    if !bin.is_empty() {
        out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
        out.extend_from_slice(b"BIN\0");
        out.extend_from_slice(&bin);
    }
    out
}

fn triangle_bin() -> Vec<u8> {
    [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        .iter()
        .flatten()
        .flat_map(|f| f.to_le_bytes())
        .collect()
}

fn triangle_json(node: &str, buffer_uri: &str) -> String {
    format!(
        r#"{{
  "asset": {{"version": "2.0"}},
  "scene": 0,
  "scenes": [{{"nodes": [0]}}],
  "nodes": [{node}],
  "meshes": [{{"primitives": [{{"attributes": {{"POSITION": 0}}}}]}}],
  "buffers": [{{"byteLength": 36{buffer_uri}}}],
  "bufferViews": [{{"buffer": 0, "byteOffset": 0, "byteLength": 36}}],
  "accessors": [{{
    "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
    "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
  }}]
}}"#
    )
}

#[test]
fn uv_sphere_matches_segment_counts() {
    let m = uv_sphere(3.0, 32, 32);
    assert_eq!(m.vertices.len(), 33 * 33);
    // Pole rows contribute one triangle per quad
    assert_eq!(m.triangle_count(), 32 * 31 * 2);
    assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
}

#[test]
fn uv_sphere_vertices_sit_on_the_radius() {
    let m = uv_sphere(3.0, 16, 12);
    for v in &m.vertices {
        let p = Vec3::from(v.position);
        assert!((p.length() - 3.0).abs() < 1e-4);
        let n = Vec3::from(v.normal);
        assert!((n - p / 3.0).length() < 1e-4);
    }
}

#[test]
fn compute_normals_faces_counter_clockwise_side() {
    let p = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let n = compute_normals(&p, &[0, 1, 2]);
    for v in n {
        assert!((v - Vec3::Z).length() < 1e-6);
    }
}

#[test]
fn compute_normals_defaults_unused_vertices_to_up() {
    let p = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::splat(5.0)];
    let n = compute_normals(&p, &[0, 1, 2]);
    assert_eq!(n[3], Vec3::Y);
}

#[test]
fn glb_triangle_is_flattened_with_node_transform() {
    let json = triangle_json(r#"{"mesh": 0, "translation": [1.0, 2.0, 3.0]}"#, "");
    let mesh = mesh_from_glb(&glb(&json, &triangle_bin())).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    let positions: Vec<Vec3> = mesh.positions().collect();
    assert_eq!(
        positions,
        vec![
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(2.0, 2.0, 3.0),
            Vec3::new(1.0, 3.0, 3.0)
        ]
    );
    for v in &mesh.vertices {
        assert!((Vec3::from(v.normal) - Vec3::Z).length() < 1e-6);
        // Default material is opaque white, fully metallic and rough
        assert_eq!(v.color, [1.0, 1.0, 1.0]);
        assert_eq!(v.material, [1.0, 1.0]);
    }
}

#[test]
fn glb_material_factors_reach_the_vertices() {
    let json = triangle_json(r#"{"mesh": 0}"#, "")
        .replace(
            r#""attributes": {"POSITION": 0}"#,
            r#""attributes": {"POSITION": 0}, "material": 0"#,
        )
        .replace(
            r#""scene": 0,"#,
            r#""scene": 0,
  "materials": [{"pbrMetallicRoughness": {
    "baseColorFactor": [0.5, 0.25, 1.0, 1.0],
    "metallicFactor": 0.25,
    "roughnessFactor": 0.625
  }}],"#,
        );
    let mesh = mesh_from_glb(&glb(&json, &triangle_bin())).unwrap();
    for v in &mesh.vertices {
        assert_eq!(v.color, [0.5, 0.25, 1.0]);
        assert_eq!(v.material, [0.25, 0.625]);
    }
}

#[test]
fn uv_sphere_leaves_material_to_the_instance() {
    let m = uv_sphere(1.0, 8, 6);
    assert!(m.vertices.iter().all(|v| v.material == [1.0, 1.0]));
}

#[test]
fn glb_child_nodes_inherit_parent_transform() {
    let nodes = r#"{"children": [1], "scale": [2.0, 2.0, 2.0]}, {"mesh": 0, "translation": [1.0, 0.0, 0.0]}"#;
    let json = triangle_json(nodes, "");
    let mesh = mesh_from_glb(&glb(&json, &triangle_bin())).unwrap();
    let positions: Vec<Vec3> = mesh.positions().collect();
    assert_eq!(positions[0], Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(positions[1], Vec3::new(4.0, 0.0, 0.0));
}

#[test]
fn glb_with_external_buffer_is_rejected() {
    let json = triangle_json(r#"{"mesh": 0}"#, r#", "uri": "tri.bin""#);
    let err = mesh_from_glb(&glb(&json, &[])).unwrap_err();
    assert!(matches!(err, LoadError::ExternalBuffer(0)));
}

#[test]
fn glb_without_geometry_is_empty() {
    let err = mesh_from_glb(&glb(r#"{"asset": {"version": "2.0"}}"#, &[])).unwrap_err();
    assert!(matches!(err, LoadError::Empty));
}

#[test]
fn garbage_bytes_are_a_gltf_error() {
    let err = mesh_from_glb(b"definitely not a model").unwrap_err();
    assert!(matches!(err, LoadError::Gltf(_)));
    assert!(err.to_string().starts_with("invalid glTF"));
}
