use crate::config::ViewerConfig;
use octaview_camera::{OrbitCamera, OrbitController};
use octaview_scene::{Scene, Viewport};

/// The viewer's explicitly-owned state: scene, camera, controls, and
/// the current surface dimensions, grouped so the resize and frame
/// callbacks receive one value instead of capturing globals.
#[derive(Debug)]
pub struct ViewerContext {
    pub scene: Scene,
    pub camera: OrbitCamera,
    pub controller: OrbitController,
    pub viewport: Viewport,
}

impl ViewerContext {
    /// Build the context from a config and the initial surface size.
    pub fn new(config: &ViewerConfig, viewport: Viewport) -> Self {
        let scene = Scene::demo(config.mesh_radius, config.spin_rate);
        tracing::info!(meshes = scene.mesh_count(), "scene created");

        let camera = OrbitCamera {
            fov: config.fov_degrees.to_radians(),
            aspect: viewport.aspect(),
            distance: config.camera_distance,
            ..OrbitCamera::default()
        };
        tracing::info!(
            fov_degrees = config.fov_degrees,
            aspect = camera.aspect,
            "camera created"
        );

        let controller = OrbitController::new();
        tracing::info!("orbit controls bound");

        Self {
            scene,
            camera,
            controller,
            viewport,
        }
    }

    /// Resize handler: recompute the camera aspect from the new surface
    /// dimensions. Idempotent; the renderer resizes its own surface.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_aspect(viewport.width, viewport.height);
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "viewer resized"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_owns_one_demo_mesh() {
        let ctx = ViewerContext::new(&ViewerConfig::default(), Viewport::new(800, 600));
        assert_eq!(ctx.scene.mesh_count(), 1);
    }

    #[test]
    fn initial_aspect_comes_from_viewport() {
        let ctx = ViewerContext::new(&ViewerConfig::default(), Viewport::new(800, 600));
        assert_eq!(ctx.camera.aspect, 800.0 / 600.0);
    }

    #[test]
    fn resize_updates_aspect_exactly() {
        let mut ctx = ViewerContext::new(&ViewerConfig::default(), Viewport::new(800, 600));
        ctx.resize(Viewport::new(1024, 768));
        assert_eq!(ctx.camera.aspect, 1024.0 / 768.0);
        assert_eq!(ctx.viewport, Viewport::new(1024, 768));
    }

    #[test]
    fn resize_is_idempotent() {
        let mut ctx = ViewerContext::new(&ViewerConfig::default(), Viewport::new(800, 600));
        ctx.resize(Viewport::new(1024, 768));
        let aspect = ctx.camera.aspect;
        let viewport = ctx.viewport;
        ctx.resize(Viewport::new(1024, 768));
        assert_eq!(ctx.camera.aspect, aspect);
        assert_eq!(ctx.viewport, viewport);
    }

    #[test]
    fn config_spin_rate_reaches_the_mesh() {
        let config = ViewerConfig {
            spin_rate: 0.05,
            ..ViewerConfig::default()
        };
        let ctx = ViewerContext::new(&config, Viewport::default());
        assert_eq!(ctx.scene.meshes()[0].spin_rate, 0.05);
    }
}
