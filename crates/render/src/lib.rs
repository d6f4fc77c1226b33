//! Rendering adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - The renderer never mutates scene or camera state; it reads both
//!   and produces pixel output on its surface.
//! - Surface dimensions change only through `resize`.
//!
//! The trait is the stable seam: the wgpu backend implements it for the
//! desktop app, and `RecordingRenderer` implements it for driver tests.

mod renderer;

pub use renderer::{FrameRecord, RecordingRenderer, RenderError, Renderer};
