//! Character Locomotion
//!
//! The per-frame movement state machine: camera-relative ground movement
//! with asymmetric acceleration, jump and gravity, ground clamping, world
//! bounds, obstacle resolution, and smooth facing rotation.
//!
//! # Update order
//!
//! The steps inside [`Locomotion::update`] are order-dependent: velocity is
//! updated before position (semi-implicit Euler), the ground clamp sees the
//! integrated position, the bounds clamp sees the ground-clamped position,
//! and obstacle resolution runs last so nothing re-introduces penetration.
//!
//! # States
//!
//! ```text
//! Grounded --jump consumed--> Airborne
//! Airborne --height <= ground--> Grounded
//! ```

use glam::{Quat, Vec2, Vec3};

use crate::math::{damp, damp_factor};
use crate::physics::{clamp_to_bounds, resolve_colliders};
use crate::world::EnvironmentFrame;

use super::config::ControllerConfig;
use super::transform::Transform;

/// Squared-length threshold for treating an intent or direction as zero.
const INPUT_EPS_SQ: f32 = 1e-8;

/// Vertical contact state of the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundState {
    /// Feet resting at ground height; vertical velocity is zero.
    Grounded,
    /// In the air; gravity applies every frame.
    Airborne,
}

/// The frame's movement intents, drained from the input tracker.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocomotionInput {
    /// Unit-length (or zero) move intent: `x` = strafe, `y` = forward.
    pub move_intent: Vec2,
    /// Run (shift) flag.
    pub running: bool,
    /// One-shot jump request, already consumed from the tracker. Discarded
    /// here if the character is not grounded.
    pub jump_requested: bool,
}

/// What happened during one locomotion step, for the controller's callbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepEvents {
    /// A jump launched this frame.
    pub jumped: bool,
    /// The moving/idle state flipped this frame; carries the new state.
    pub movement_changed: Option<bool>,
}

/// Character locomotion state.
#[derive(Debug, Clone)]
pub struct Locomotion {
    /// Current world-space velocity (m/s). Horizontal components are damped
    /// toward the desired velocity; the vertical component belongs to
    /// gravity and jumping only.
    velocity: Vec3,
    /// Vertical contact state.
    ground_state: GroundState,
    /// Whether there was move input last frame (for the change edge).
    was_moving: bool,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            ground_state: GroundState::Grounded,
            was_moving: false,
        }
    }
}

impl Locomotion {
    /// Create locomotion state at rest on the ground.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current world-space velocity.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Current horizontal speed (XZ plane).
    pub fn horizontal_speed(&self) -> f32 {
        Vec2::new(self.velocity.x, self.velocity.z).length()
    }

    /// Current vertical contact state.
    pub fn ground_state(&self) -> GroundState {
        self.ground_state
    }

    /// True when the character's feet rest at ground height.
    pub fn is_grounded(&self) -> bool {
        self.ground_state == GroundState::Grounded
    }

    /// Reset to rest on the ground (teleport, respawn).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance the character one frame.
    ///
    /// `camera_forward` is the camera's look direction already flattened to
    /// the horizontal plane and unit length (the rig guards the overhead
    /// degenerate case).
    ///
    /// # Arguments
    ///
    /// * `dt` - Frame time in seconds, already clamped by the controller
    /// * `input` - The frame's drained intents
    /// * `camera_forward` - Flattened camera forward (unit length)
    /// * `transform` - The character transform, mutated in place
    /// * `env` - This frame's environment view
    /// * `config` - Controller tuning
    pub fn update(
        &mut self,
        dt: f32,
        input: &LocomotionInput,
        camera_forward: Vec3,
        transform: &mut Transform,
        env: &EnvironmentFrame,
        config: &ControllerConfig,
    ) -> StepEvents {
        let mut events = StepEvents::default();

        // Camera-relative movement basis on the horizontal plane
        let forward = camera_forward;
        let right = forward.cross(Vec3::Y).normalize_or_zero();

        let intent = input.move_intent;
        let has_input = intent.length_squared() > INPUT_EPS_SQ;
        let move_dir =
            (forward * intent.y + right * intent.x).normalize_or_zero();

        // Desired horizontal velocity from intent and run state
        let target_speed = if input.running {
            config.run_speed
        } else {
            config.walk_speed
        };
        let desired = move_dir * target_speed;

        // Asymmetric response: starting to move is snappier than coasting
        // to a stop
        let response = if has_input {
            config.accel_response
        } else {
            config.decel_response
        };
        self.velocity.x = damp(self.velocity.x, desired.x, response, dt);
        self.velocity.z = damp(self.velocity.z, desired.z, response, dt);

        // Jump consumes the request whether or not it launches; an airborne
        // press was already discarded by the tracker drain
        if input.jump_requested && self.ground_state == GroundState::Grounded {
            self.velocity.y = config.jump_speed;
            self.ground_state = GroundState::Airborne;
            events.jumped = true;
        }

        // Gravity, velocity before position (semi-implicit Euler)
        if self.ground_state == GroundState::Airborne {
            self.velocity.y -= config.gravity * dt;
        }

        transform.position += self.velocity * dt;

        // Ground contact
        if transform.position.y <= env.ground_y {
            transform.position.y = env.ground_y;
            self.velocity.y = 0.0;
            self.ground_state = GroundState::Grounded;
        } else {
            self.ground_state = GroundState::Airborne;
        }

        // World edge, then obstacles; both see the settled position
        transform.position =
            clamp_to_bounds(transform.position, env.bounds_half_size, config.player_radius);
        let (position, velocity) = resolve_colliders(
            transform.position,
            self.velocity,
            config.player_radius,
            env.tree_colliders,
        );
        transform.position = position;
        self.velocity = velocity;

        // Face the movement direction; idle keeps the last facing, even
        // mid-air
        if has_input && move_dir.length_squared() > INPUT_EPS_SQ {
            let target_yaw = move_dir.x.atan2(move_dir.z);
            let target_rotation = Quat::from_rotation_y(target_yaw);
            let t = damp_factor(config.rotation_response, dt);
            transform.rotation = transform.rotation.slerp(target_rotation, t);
        }

        if has_input != self.was_moving {
            self.was_moving = has_input;
            events.movement_changed = Some(has_input);
        }

        events
    }
}
