//! Render loop driver: owns the viewer's mutable state and the
//! per-frame step that advances it.
//!
//! # Invariants
//! - All state mutation happens on the single event-loop thread.
//! - The frame loop counts a frame only while running; a stopped loop
//!   never advances the scene.
//! - Setup is an explicit `Result`; a failed setup means the frame loop
//!   is never started.

pub mod config;
pub mod context;
pub mod frame_loop;

pub use config::{SetupError, ViewerConfig};
pub use context::ViewerContext;
pub use frame_loop::{FrameLoop, run_frame};
