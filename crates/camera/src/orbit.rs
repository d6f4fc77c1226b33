use glam::{Mat4, Vec3};

/// Orbit camera: the eye circles a target point at a fixed distance,
/// steered by yaw and pitch. Projection is a standard perspective
/// frustum (fov, aspect, near/far clip planes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
    pub zoom_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 3.0,
            yaw: 90.0_f32.to_radians(),
            pitch: 0.0,
            fov: 60.0_f32.to_radians(),
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 1000.0,
            sensitivity: 0.005,
            zoom_speed: 0.1,
        }
    }
}

impl OrbitCamera {
    /// Eye position derived from the orbit state.
    pub fn eye(&self) -> Vec3 {
        let dir = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        );
        self.target + dir * self.distance
    }

    /// Recompute the aspect ratio from surface dimensions.
    /// Exactly width / height; idempotent for equal inputs.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Orbit by pointer deltas. Pitch is clamped short of the poles so
    /// the view direction never becomes parallel to the up vector.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch += dy * self.sensitivity;
        self.pitch = self
            .pitch
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    /// Zoom by a scroll delta. Positive delta moves the eye closer.
    /// Distance never drops below the near plane.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * self.zoom_speed)).max(self.near * 2.0);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
