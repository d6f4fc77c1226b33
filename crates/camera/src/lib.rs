//! Orbit camera: perspective projection plus orbit motion around a target.
//!
//! # Invariants
//! - Camera aspect is mutated only by the resize path.
//! - Camera orientation is mutated only through the controller; the
//!   render loop driver never touches it directly.

pub mod controller;
pub mod orbit;

pub use controller::OrbitController;
pub use orbit::OrbitCamera;
