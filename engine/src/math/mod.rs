//! Math Utilities
//!
//! Small math primitives shared across the engine. Currently this is the
//! exponential damping toolkit used by the camera rig and locomotion.

pub mod damping;

pub use damping::{damp, damp_factor, damp_vec3, wrap_angle};
