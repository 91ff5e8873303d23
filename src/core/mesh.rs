use crate::error::LoadError;
use glam::{Mat3, Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    /// Metalness and roughness factors, multiplied by the instance material.
    pub material: [f32; 2],
}

/// Indexed triangle list in model space.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| Vec3::from(v.position))
    }
}

/// Latitude/longitude sphere, white vertex colour so the instance colour
/// decides the final tint.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let theta = v * std::f32::consts::PI;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let phi = u * std::f32::consts::TAU;
            let n = Vec3::new(-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin());
            vertices.push(MeshVertex {
                position: (n * radius).to_array(),
                normal: n.to_array(),
                color: [1.0, 1.0, 1.0],
                material: [1.0, 1.0],
            });
        }
    }
    let mut indices = Vec::with_capacity((w * (h - 1) * 6) as usize);
    let row = w + 1;
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // the poles collapse one triangle of each quad
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    MeshData { vertices, indices }
}

/// Flatten the default scene of a binary glTF into a single triangle list.
///
/// Node transforms are baked into positions and normals, and each
/// primitive's base colour factor becomes its vertex colour. Textures,
/// skins and animations are ignored.
pub fn mesh_from_glb(bytes: &[u8]) -> Result<MeshData, LoadError> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let mut buffers: Vec<&[u8]> = Vec::new();
    for buffer in gltf.buffers() {
        match buffer.source() {
            gltf::buffer::Source::Bin => match gltf.blob.as_deref() {
                Some(blob) => buffers.push(blob),
                None => return Err(LoadError::ExternalBuffer(buffer.index())),
            },
            gltf::buffer::Source::Uri(_) => return Err(LoadError::ExternalBuffer(buffer.index())),
        }
    }

    let mut out = MeshData::default();
    let scene = gltf.default_scene().or_else(|| gltf.scenes().next());
    match scene {
        Some(scene) => {
            for node in scene.nodes() {
                append_node(&node, Mat4::IDENTITY, &buffers, &mut out);
            }
        }
        None => {
            // Scene-less files still list their meshes; draw them untransformed.
            for mesh in gltf.meshes() {
                append_mesh(&mesh, Mat4::IDENTITY, &buffers, &mut out);
            }
        }
    }

    if out.indices.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(out)
}

fn append_node(node: &gltf::Node, parent: Mat4, buffers: &[&[u8]], out: &mut MeshData) {
    let local = Mat4::from_cols_array_2d(&node.transform().matrix());
    let world = parent * local;
    if let Some(mesh) = node.mesh() {
        append_mesh(&mesh, world, buffers, out);
    }
    for child in node.children() {
        append_node(&child, world, buffers, out);
    }
}

fn append_mesh(mesh: &gltf::Mesh, world: Mat4, buffers: &[&[u8]], out: &mut MeshData) {
    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            log::debug!("[model] skipping {:?} primitive", primitive.mode());
            continue;
        }
        let reader = primitive.reader(|b| buffers.get(b.index()).copied());
        let positions: Vec<Vec3> = match reader.read_positions() {
            Some(iter) => iter.map(|p| world.transform_point3(Vec3::from(p))).collect(),
            None => continue,
        };
        if positions.is_empty() {
            continue;
        }
        let indices: Vec<u32> = match reader.read_indices() {
            Some(ix) => ix.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };
        if indices.iter().any(|&i| i as usize >= positions.len()) {
            log::warn!("[model] primitive has out-of-range indices; skipped");
            continue;
        }
        let normals: Vec<Vec3> = match reader.read_normals() {
            Some(iter) => iter
                .map(|n| (normal_matrix * Vec3::from(n)).normalize_or_zero())
                .collect(),
            None => compute_normals(&positions, &indices),
        };
        let pbr = primitive.material().pbr_metallic_roughness();
        let base = pbr.base_color_factor();
        let color = [base[0], base[1], base[2]];
        let material = [pbr.metallic_factor(), pbr.roughness_factor()];

        let offset = out.vertices.len() as u32;
        out.vertices
            .extend(positions.iter().enumerate().map(|(i, p)| MeshVertex {
                position: p.to_array(),
                normal: normals.get(i).copied().unwrap_or(Vec3::Y).to_array(),
                color,
                material,
            }));
        let whole_triangles = indices.len() - indices.len() % 3;
        out.indices
            .extend(indices[..whole_triangles].iter().map(|i| i + offset));
    }
}

/// Area-weighted vertex normals for primitives that ship without them.
pub fn compute_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals
        .into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            if n == Vec3::ZERO {
                Vec3::Y
            } else {
                n
            }
        })
        .collect()
}
