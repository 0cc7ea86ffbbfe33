//! World Module
//!
//! The controller-facing view of the world: ground height, bounds, and
//! static obstacles, borrowed fresh each frame from whoever owns the scene.

pub mod environment;

pub use environment::{
    CircleCollider, DEFAULT_BOUNDS_HALF_SIZE, DEFAULT_GROUND_Y, EnvironmentFrame,
};
