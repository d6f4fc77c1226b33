use glam::Mat4;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Physical pixel dimensions of the drawing surface.
///
/// Both dimensions are clamped to a minimum of 1 so a minimized window
/// never produces a zero-area surface or a NaN aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Aspect ratio as width / height.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Index of a mesh within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub usize);

/// A renderable mesh with a rotation about the Y axis.
///
/// `advance` adds `spin_rate` radians per call. The rate is per frame,
/// deliberately not scaled by elapsed time, so animation speed tracks
/// the display refresh rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinMesh {
    /// Current rotation about Y, always in [0, 2π).
    pub rotation: f32,
    /// Radians added per frame.
    pub spin_rate: f32,
    /// Circumscribed radius of the mesh.
    pub radius: f32,
}

impl SpinMesh {
    pub fn new(radius: f32, spin_rate: f32) -> Self {
        Self {
            rotation: 0.0,
            spin_rate,
            radius,
        }
    }

    /// Advance the rotation by one frame's increment, wrapping at 2π.
    pub fn advance(&mut self) {
        self.rotation = (self.rotation + self.spin_rate).rem_euclid(TAU);
    }

    /// Model matrix for the current rotation.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation)
    }
}

impl Default for SpinMesh {
    fn default() -> Self {
        Self::new(1.0, 0.01)
    }
}

/// Container of renderable objects.
///
/// The scene owns its meshes for the program's lifetime; nothing is
/// removed after setup. Meshes are stored in insertion order and
/// addressed by `MeshId`.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    meshes: Vec<SpinMesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical viewer scene: one octahedron mesh.
    pub fn demo(radius: f32, spin_rate: f32) -> Self {
        let mut scene = Self::new();
        scene.add(SpinMesh::new(radius, spin_rate));
        scene
    }

    /// Add a mesh and return its id.
    pub fn add(&mut self, mesh: SpinMesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn get(&self, id: MeshId) -> Option<&SpinMesh> {
        self.meshes.get(id.0)
    }

    pub fn meshes(&self) -> &[SpinMesh] {
        &self.meshes
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Advance every mesh by one frame.
    pub fn advance_all(&mut self) {
        for mesh in &mut self.meshes {
            mesh.advance();
        }
    }
}
