//! Player Module
//!
//! The third-person character controller and its parts.
//!
//! # Components
//!
//! - [`ThirdPersonController`] - The per-frame orchestrator: buffered input,
//!   orbit camera, locomotion, and lifecycle
//! - [`Locomotion`] - Camera-relative movement, jump/gravity, ground and
//!   obstacle resolution
//! - [`ControllerConfig`] - Immutable per-instance tuning, validated at
//!   construction
//! - [`Transform`] - The externally owned character transform handle

pub mod config;
pub mod controller;
pub mod locomotion;
pub mod transform;

pub use config::{ConfigError, ControllerConfig, MAX_FRAME_DT};
pub use controller::ThirdPersonController;
pub use locomotion::{GroundState, Locomotion, LocomotionInput, StepEvents};
pub use transform::Transform;
