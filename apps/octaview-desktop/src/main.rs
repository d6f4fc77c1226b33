use anyhow::Result;
use clap::Parser;
use octaview_driver::{FrameLoop, SetupError, ViewerConfig, ViewerContext};
use octaview_render_wgpu::WgpuMeshRenderer;
use octaview_scene::Viewport;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "octaview-desktop", about = "Rotating octahedron viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Optional YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

/// GPU-side state: surface, device/queue, and the mesh renderer.
struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    renderer: WgpuMeshRenderer,
}

impl GpuState {
    /// Acquire the GPU and build the renderer. Every stage is fallible
    /// and reported as a `SetupError` so the caller can decide whether
    /// the frame loop ever starts.
    fn new(window: Arc<Window>, config: &ViewerConfig) -> Result<Self, SetupError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| SetupError::Gpu(format!("create surface: {e}")))?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| SetupError::Gpu("no compatible adapter".into()))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("octaview_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .map_err(|e| SetupError::Gpu(format!("request device: {e}")))?;

        let size = window.inner_size();
        let viewport = Viewport::new(size.width, size.height);
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: viewport.width,
            height: viewport.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let renderer = WgpuMeshRenderer::new(&device, surface_format, viewport, config.mesh_radius);

        tracing::info!(
            backend = adapter.get_info().backend.to_str(),
            "GPU initialized"
        );

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            renderer,
        })
    }
}

struct ViewerApp {
    config: ViewerConfig,
    ctx: ViewerContext,
    frame_loop: FrameLoop,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    setup_failed: bool,
}

impl ViewerApp {
    fn new(config: ViewerConfig) -> Self {
        let viewport = Viewport::new(config.window_width, config.window_height);
        Self {
            ctx: ViewerContext::new(&config, viewport),
            config,
            frame_loop: FrameLoop::new(),
            window: None,
            gpu: None,
            setup_failed: false,
        }
    }

    fn handle_resize(&mut self, new_size: PhysicalSize<u32>) {
        let viewport = Viewport::new(new_size.width, new_size.height);
        self.ctx.resize(viewport);
        if let Some(gpu) = &mut self.gpu {
            gpu.surface_config.width = viewport.width;
            gpu.surface_config.height = viewport.height;
            gpu.surface.configure(&gpu.device, &gpu.surface_config);
            gpu.renderer.resize(&gpu.device, viewport);
        }
    }

    fn redraw(&mut self) {
        let Some(gpu) = &self.gpu else {
            return;
        };

        if !self.frame_loop.step(&mut self.ctx) {
            return;
        }

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.surface_config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        gpu.renderer
            .render(&gpu.device, &gpu.queue, &view, &self.ctx.scene, &self.ctx.camera);

        output.present();

        // Chain the next one-shot redraw while the loop runs.
        if self.frame_loop.is_running() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.setup_failed {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Octaview")
            .with_inner_size(PhysicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                // Single setup-failure report; the loop is never started.
                tracing::error!("viewer setup failed: {e}");
                self.setup_failed = true;
                return;
            }
        };

        match GpuState::new(window.clone(), &self.config) {
            Ok(gpu) => {
                let size = window.inner_size();
                self.ctx.resize(Viewport::new(size.width, size.height));
                self.window = Some(window);
                self.gpu = Some(gpu);
                self.frame_loop.start();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Err(e) => {
                tracing::error!("viewer setup failed: {e}");
                self.setup_failed = true;
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.frame_loop.stop();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.handle_resize(new_size);
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                self.ctx
                    .controller
                    .set_dragging(state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
                };
                self.ctx.controller.scroll(&mut self.ctx.camera, scroll);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.ctx
                .controller
                .pointer_motion(&mut self.ctx.camera, delta.0 as f32, delta.1 as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.frame_loop.is_running() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("octaview-desktop starting");

    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
