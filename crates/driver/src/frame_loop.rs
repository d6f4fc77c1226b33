use crate::context::ViewerContext;
use octaview_render::{RenderError, Renderer};

/// Lifecycle of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Explicit model of the chain of one-shot redraw requests.
///
/// The loop starts after successful setup and steps once per display
/// refresh until stopped. Unlike a raw request-next-frame chain it has
/// an explicit `stop`, so shutdown can cancel the re-request.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            frames: 0,
        }
    }

    /// Transition Idle → Running. Starting a stopped loop is a no-op.
    pub fn start(&mut self) {
        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
            tracing::info!("frame loop started");
        }
    }

    /// Cancel the loop. No further frames are counted.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            tracing::info!(frames = self.frames, "frame loop stopped");
        }
        self.state = LoopState::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames stepped since start.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One frame step: advance every mesh by its per-frame increment
    /// and bump the counter. Returns whether the caller should schedule
    /// the next frame.
    pub fn step(&mut self, ctx: &mut ViewerContext) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        ctx.scene.advance_all();
        self.frames += 1;
        true
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// One full frame: step the loop, then draw the scene/camera pair.
///
/// Returns `Ok(true)` when the next frame should be scheduled,
/// `Ok(false)` when the loop has stopped.
pub fn run_frame(
    frame_loop: &mut FrameLoop,
    ctx: &mut ViewerContext,
    renderer: &mut impl Renderer,
) -> Result<bool, RenderError> {
    if !frame_loop.step(ctx) {
        return Ok(false);
    }
    renderer.render(&ctx.scene, &ctx.camera)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use octaview_render::RecordingRenderer;
    use octaview_scene::Viewport;

    fn demo_context() -> ViewerContext {
        ViewerContext::new(&ViewerConfig::default(), Viewport::new(800, 600))
    }

    #[test]
    fn idle_loop_steps_nothing() {
        let mut fl = FrameLoop::new();
        let mut ctx = demo_context();
        assert!(!fl.step(&mut ctx));
        assert_eq!(fl.frames(), 0);
        assert_eq!(ctx.scene.meshes()[0].rotation, 0.0);
    }

    #[test]
    fn rotation_is_frames_times_increment() {
        let mut fl = FrameLoop::new();
        let mut ctx = demo_context();
        fl.start();
        for _ in 0..100 {
            assert!(fl.step(&mut ctx));
        }
        assert_eq!(fl.frames(), 100);
        // 100 frames at the default 0.01 rad/frame.
        assert!((ctx.scene.meshes()[0].rotation - 1.0).abs() < 1e-4);
    }

    #[test]
    fn stop_cancels_the_chain() {
        let mut fl = FrameLoop::new();
        let mut ctx = demo_context();
        fl.start();
        fl.step(&mut ctx);
        fl.stop();
        assert!(!fl.step(&mut ctx));
        assert_eq!(fl.frames(), 1);
    }

    #[test]
    fn stopped_loop_cannot_restart() {
        let mut fl = FrameLoop::new();
        fl.start();
        fl.stop();
        fl.start();
        assert!(!fl.is_running());
    }

    #[test]
    fn run_frame_draws_once_per_step() {
        let mut fl = FrameLoop::new();
        let mut ctx = demo_context();
        let mut renderer = RecordingRenderer::new(ctx.viewport);
        fl.start();
        for _ in 0..3 {
            assert!(run_frame(&mut fl, &mut ctx, &mut renderer).unwrap());
        }
        assert_eq!(renderer.frame_count(), 3);
        // Frame N draws rotation (N+1) * rate: step happens before draw.
        assert!((renderer.frames()[2].rotation - 0.03).abs() < 1e-6);
    }

    #[test]
    fn run_frame_after_stop_draws_nothing() {
        let mut fl = FrameLoop::new();
        let mut ctx = demo_context();
        let mut renderer = RecordingRenderer::new(ctx.viewport);
        fl.start();
        fl.stop();
        assert!(!run_frame(&mut fl, &mut ctx, &mut renderer).unwrap());
        assert_eq!(renderer.frame_count(), 0);
    }

    #[test]
    fn unstarted_loop_never_renders() {
        // Models a failed setup: start() is never called.
        let mut fl = FrameLoop::new();
        let mut ctx = demo_context();
        let mut renderer = RecordingRenderer::new(ctx.viewport);
        assert!(!run_frame(&mut fl, &mut ctx, &mut renderer).unwrap());
        assert_eq!(fl.frames(), 0);
        assert_eq!(renderer.frame_count(), 0);
    }

    #[test]
    fn end_to_end_resize_flow() {
        let mut fl = FrameLoop::new();
        let mut ctx = demo_context();
        let mut renderer = RecordingRenderer::new(ctx.viewport);
        assert_eq!(ctx.camera.aspect, 800.0 / 600.0);

        fl.start();
        run_frame(&mut fl, &mut ctx, &mut renderer).unwrap();

        let new = Viewport::new(1024, 768);
        ctx.resize(new);
        renderer.resize(new);
        run_frame(&mut fl, &mut ctx, &mut renderer).unwrap();

        assert_eq!(ctx.camera.aspect, 1024.0 / 768.0);
        assert_eq!(renderer.viewport(), new);
        assert_eq!(renderer.frames()[1].viewport, new);
        assert_eq!(renderer.frames()[1].camera_aspect, 1024.0 / 768.0);
    }
}
