//! Scene state: the container of renderable objects and their spin.
//!
//! # Invariants
//! - Mesh rotation is advanced by a fixed per-frame increment and wraps
//!   modulo one full turn. The rate is frame-count-based, not time-based.
//! - The demo scene holds exactly one mesh.

pub mod scene;

pub use scene::{MeshId, Scene, SpinMesh, Viewport};
