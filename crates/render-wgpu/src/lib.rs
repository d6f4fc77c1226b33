//! wgpu render backend for the octaview viewer.
//!
//! Renders the scene's meshes as octahedra with a normal-based shading
//! material (fragment color derived from the world-space normal).
//!
//! # Invariants
//! - The backend never mutates scene or camera state.
//! - The depth texture is recreated on every surface resize.

mod gpu;
mod mesh;
mod shaders;

pub use gpu::WgpuMeshRenderer;
pub use mesh::{Vertex, octahedron_mesh};
