//! Grove Engine Library
//!
//! The reusable core of the grove_walk demo: a third-person character
//! controller with an orbiting, damped follow camera, driven by buffered
//! keyboard/pointer/wheel input and colliding with a simple circle-obstacle
//! world. Window-system plumbing stays in the binaries; everything here is
//! per-frame state and math.
//!
//! # Modules
//!
//! - [`player`] - The third-person controller: locomotion, configuration,
//!   and the per-frame orchestrator
//! - [`camera`] - Orbit rig math and the render-facing camera handle
//! - [`input`] - Buffered input tracker (keys, drag, wheel)
//! - [`physics`] - Circle collision resolution and world-bounds clamping
//! - [`world`] - The frame-scoped environment view (ground, bounds, trees)
//! - [`math`] - Exponential damping utilities
//!
//! # Example
//!
//! ```ignore
//! use grove_engine::{Camera, ControllerConfig, EnvironmentFrame, ThirdPersonController, Transform};
//!
//! let mut controller = ThirdPersonController::new(ControllerConfig::default())?;
//! let mut target = Transform::default();
//! let mut camera = Camera::default();
//!
//! // Forward window events:
//! // controller.handle_key(code, pressed);
//! // controller.handle_pointer_motion(x, y);
//!
//! // Once per frame:
//! let colliders = scene.tree_colliders();
//! let env = EnvironmentFrame {
//!     ground_y: scene.ground_y,
//!     bounds_half_size: scene.bounds_half_size,
//!     tree_colliders: &colliders,
//! };
//! controller.update(dt, &mut target, &mut camera, &env);
//! ```

pub mod camera;
pub mod input;
pub mod math;
pub mod physics;
pub mod player;
pub mod world;

// Demo-scene modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the controller surface at crate level for convenience
pub use camera::{Camera, OrbitRig};
pub use input::InputTracker;
pub use player::{
    ConfigError, ControllerConfig, GroundState, ThirdPersonController, Transform,
};
pub use world::{CircleCollider, EnvironmentFrame};
