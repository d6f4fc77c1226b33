use octaview_camera::OrbitCamera;
use octaview_scene::{Scene, Viewport};

/// Errors surfaced by a renderer during a frame.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("drawing surface lost")]
    SurfaceLost,
    #[error("render backend error: {0}")]
    Backend(String),
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer rasterizes a scene/camera pair into pixel output on a
/// drawing surface it owns. Resizing the surface is separate from
/// drawing so the resize handler stays event-driven.
pub trait Renderer {
    /// Resize the drawing surface. Idempotent for equal dimensions.
    fn resize(&mut self, viewport: Viewport);

    /// Render one frame from the given scene and camera.
    fn render(&mut self, scene: &Scene, camera: &OrbitCamera) -> Result<(), RenderError>;

    /// Current surface dimensions.
    fn viewport(&self) -> Viewport;
}

/// Recording renderer for tests and headless smoke checks.
///
/// Draws nothing; counts frames and records the viewport and the first
/// mesh's rotation at each draw so tests can assert on the sequence the
/// driver produced.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    viewport: Viewport,
    frames: Vec<FrameRecord>,
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRecord {
    pub viewport: Viewport,
    pub rotation: f32,
    pub camera_aspect: f32,
}

impl RecordingRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            frames: Vec::new(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }
}

impl Renderer for RecordingRenderer {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn render(&mut self, scene: &Scene, camera: &OrbitCamera) -> Result<(), RenderError> {
        self.frames.push(FrameRecord {
            viewport: self.viewport,
            rotation: scene.meshes().first().map(|m| m.rotation).unwrap_or(0.0),
            camera_aspect: camera.aspect,
        });
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_renderer_counts_frames() {
        let mut r = RecordingRenderer::new(Viewport::new(800, 600));
        let scene = Scene::demo(1.0, 0.01);
        let cam = OrbitCamera::default();
        r.render(&scene, &cam).unwrap();
        r.render(&scene, &cam).unwrap();
        assert_eq!(r.frame_count(), 2);
    }

    #[test]
    fn resize_updates_reported_viewport() {
        let mut r = RecordingRenderer::new(Viewport::new(800, 600));
        r.resize(Viewport::new(1024, 768));
        assert_eq!(r.viewport(), Viewport::new(1024, 768));
    }

    #[test]
    fn resize_is_idempotent() {
        let mut r = RecordingRenderer::new(Viewport::new(800, 600));
        r.resize(Viewport::new(1024, 768));
        r.resize(Viewport::new(1024, 768));
        assert_eq!(r.viewport(), Viewport::new(1024, 768));
    }

    #[test]
    fn frames_record_mesh_rotation() {
        let mut r = RecordingRenderer::new(Viewport::default());
        let mut scene = Scene::demo(1.0, 0.5);
        let cam = OrbitCamera::default();
        r.render(&scene, &cam).unwrap();
        scene.advance_all();
        r.render(&scene, &cam).unwrap();
        assert_eq!(r.frames()[0].rotation, 0.0);
        assert!((r.frames()[1].rotation - 0.5).abs() < 1e-6);
    }
}
