use crate::orbit::OrbitCamera;

/// Maps pointer input onto orbit camera motion.
///
/// The controller owns the drag state: motion deltas only reach the
/// camera while the pointer button is held, scroll always zooms.
#[derive(Debug, Default)]
pub struct OrbitController {
    dragging: bool,
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer button pressed or released.
    pub fn set_dragging(&mut self, dragging: bool) {
        if dragging != self.dragging {
            tracing::debug!(dragging, "orbit drag state changed");
        }
        self.dragging = dragging;
    }

    /// Pointer motion delta in surface pixels.
    pub fn pointer_motion(&self, camera: &mut OrbitCamera, dx: f32, dy: f32) {
        if self.dragging {
            camera.orbit(dx, dy);
        }
    }

    /// Scroll delta in lines or pixels, normalized by the caller.
    pub fn scroll(&self, camera: &mut OrbitCamera, delta: f32) {
        camera.zoom(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_ignored_unless_dragging() {
        let mut cam = OrbitCamera::default();
        let start = cam.yaw;
        let ctl = OrbitController::new();
        ctl.pointer_motion(&mut cam, 50.0, 0.0);
        assert_eq!(cam.yaw, start);
    }

    #[test]
    fn motion_orbits_while_dragging() {
        let mut cam = OrbitCamera::default();
        let start = cam.yaw;
        let mut ctl = OrbitController::new();
        ctl.set_dragging(true);
        ctl.pointer_motion(&mut cam, 50.0, 0.0);
        assert_ne!(cam.yaw, start);
    }

    #[test]
    fn release_stops_orbiting() {
        let mut cam = OrbitCamera::default();
        let mut ctl = OrbitController::new();
        ctl.set_dragging(true);
        ctl.set_dragging(false);
        let yaw = cam.yaw;
        ctl.pointer_motion(&mut cam, 50.0, 0.0);
        assert_eq!(cam.yaw, yaw);
    }

    #[test]
    fn scroll_zooms_without_drag() {
        let mut cam = OrbitCamera::default();
        let start = cam.distance;
        let ctl = OrbitController::new();
        ctl.scroll(&mut cam, 1.0);
        assert!(cam.distance < start);
    }
}
