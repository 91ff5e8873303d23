pub mod backdrop;
pub mod bounds;
pub mod drift;
pub mod mesh;
pub mod spheres;
pub mod starfield;

pub use backdrop::{AssetState, ModelSlot, Placement};
pub use bounds::Aabb;
pub use drift::DriftField;
pub use mesh::{mesh_from_glb, uv_sphere, MeshData, MeshVertex};
pub use spheres::SphereField;
pub use starfield::StarField;

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
