//! Third-Person Controller
//!
//! The orchestrator: owns the input tracker, orbit camera rig, and
//! locomotion state, and exposes a single per-frame `update` plus the event
//! entry points the host window loop forwards into.
//!
//! # Per-frame flow
//!
//! `update(dt, ..)` drains the buffered input, applies orbit/zoom intents to
//! the rig, smooths the camera toward its orbital position, then runs
//! locomotion against the frame's environment view. Event handlers only
//! write buffered input; all movement happens inside `update`.
//!
//! # Example
//!
//! ```rust,ignore
//! use grove_engine::player::{ControllerConfig, ThirdPersonController, Transform};
//! use grove_engine::camera::Camera;
//! use grove_engine::world::EnvironmentFrame;
//!
//! let mut controller = ThirdPersonController::new(ControllerConfig::default())?;
//! let mut target = Transform::default();
//! let mut camera = Camera::default();
//!
//! // Window loop forwards events:
//! controller.handle_key(key_code, pressed);
//!
//! // Once per frame:
//! let colliders = scene.tree_colliders();
//! let env = EnvironmentFrame { ground_y: 0.0, bounds_half_size: 80.0, tree_colliders: &colliders };
//! controller.update(dt, &mut target, &mut camera, &env);
//! ```

use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::camera::{Camera, OrbitRig};
use crate::input::InputTracker;
use crate::world::EnvironmentFrame;

use super::config::{ConfigError, ControllerConfig, MAX_FRAME_DT};
use super::locomotion::{GroundState, Locomotion, LocomotionInput};
use super::transform::Transform;

/// Callback fired when a jump launches.
pub type JumpCallback = Box<dyn FnMut()>;

/// Callback fired on a moving/idle transition, with the new state.
pub type MovementChangeCallback = Box<dyn FnMut(bool)>;

/// Third-person movement/camera controller.
///
/// Construct with [`ThirdPersonController::new`], forward window events into
/// the `handle_*` methods, and call [`update`] once per frame with the
/// character transform, render camera, and environment view.
///
/// [`update`]: ThirdPersonController::update
pub struct ThirdPersonController {
    config: ControllerConfig,
    input: InputTracker,
    rig: OrbitRig,
    locomotion: Locomotion,
    on_jump: Option<JumpCallback>,
    on_movement_change: Option<MovementChangeCallback>,
    disposed: bool,
}

impl ThirdPersonController {
    /// Create a controller from a validated configuration.
    ///
    /// Initial orbit parameters are clamped into their configured ranges.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in `config`.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rig = OrbitRig::new();
        rig.yaw = config.initial_yaw;
        rig.phi = config.initial_phi.clamp(config.min_phi, config.max_phi);
        rig.distance = config
            .initial_distance
            .clamp(config.min_distance, config.max_distance);
        rig.min_phi = config.min_phi;
        rig.max_phi = config.max_phi;
        rig.min_distance = config.min_distance;
        rig.max_distance = config.max_distance;
        rig.target_height = config.target_height;
        rig.smoothing = config.camera_smoothing;

        Ok(Self {
            config,
            input: InputTracker::new(),
            rig,
            locomotion: Locomotion::new(),
            on_jump: None,
            on_movement_change: None,
            disposed: false,
        })
    }

    /// Register a callback fired synchronously when a jump launches.
    pub fn set_on_jump(&mut self, callback: impl FnMut() + 'static) {
        self.on_jump = Some(Box::new(callback));
    }

    /// Register a callback fired synchronously on each moving/idle edge.
    pub fn set_on_movement_change(&mut self, callback: impl FnMut(bool) + 'static) {
        self.on_movement_change = Some(Box::new(callback));
    }

    /// The controller's configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The orbit camera rig (current yaw/phi/distance and smoothed position).
    pub fn rig(&self) -> &OrbitRig {
        &self.rig
    }

    /// Current character velocity.
    pub fn velocity(&self) -> glam::Vec3 {
        self.locomotion.velocity()
    }

    /// Current vertical contact state.
    pub fn ground_state(&self) -> GroundState {
        self.locomotion.ground_state()
    }

    /// True when the character rests on the ground.
    pub fn is_grounded(&self) -> bool {
        self.locomotion.is_grounded()
    }

    /// Whether [`dispose`] has been called.
    ///
    /// [`dispose`]: ThirdPersonController::dispose
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // === Event entry points (forwarded by the host window loop) ============

    /// Key press/release. Buffered; read at the next `update`.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !self.disposed {
            self.input.handle_key(key, pressed);
        }
    }

    /// Pointer button press/release (primary button drives the orbit drag).
    pub fn handle_pointer_button(&mut self, button: MouseButton, pressed: bool) {
        if !self.disposed {
            self.input.handle_pointer_button(button, pressed);
        }
    }

    /// Pointer motion in window coordinates.
    pub fn handle_pointer_motion(&mut self, x: f64, y: f64) {
        if !self.disposed {
            self.input.handle_pointer_motion(x, y);
        }
    }

    /// Pointer cancel (cursor left the surface mid-drag).
    pub fn handle_pointer_cancel(&mut self) {
        if !self.disposed {
            self.input.handle_pointer_cancel();
        }
    }

    /// Wheel scroll; adjusts orbit distance at the next `update`.
    pub fn handle_wheel(&mut self, delta: MouseScrollDelta) {
        if !self.disposed {
            self.input.handle_wheel(delta);
        }
    }

    /// Keyboard focus lost; releases all held keys and drags.
    pub fn handle_focus_lost(&mut self) {
        if !self.disposed {
            self.input.handle_focus_lost();
        }
    }

    // === Per-frame update ==================================================

    /// Advance the controller by `dt` seconds.
    ///
    /// `dt` is clamped to 50 ms so frame hitches cannot tunnel the character
    /// through geometry. `target` is mutated in place; `camera` receives the
    /// smoothed orbital position and exact aim every frame. `env` is read
    /// fresh - nothing from it is retained past this call.
    ///
    /// No-op after [`dispose`].
    ///
    /// [`dispose`]: ThirdPersonController::dispose
    pub fn update(
        &mut self,
        dt: f32,
        target: &mut Transform,
        camera: &mut Camera,
        env: &EnvironmentFrame,
    ) {
        if self.disposed {
            return;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        // Orbit intents: drag yaw is inverted horizontal, drag phi follows
        // vertical motion; wheel steps the distance
        let (drag_x, drag_y) = self.input.consume_orbit_delta();
        self.rig.rotate(
            -drag_x * self.config.rotate_sensitivity,
            drag_y * self.config.rotate_sensitivity,
        );
        let ticks = self.input.consume_zoom_ticks();
        self.rig.zoom(ticks * self.config.zoom_step);

        // Camera first: locomotion reads this frame's look direction
        let aim = self.rig.update(dt, target.position);
        camera.position = self.rig.position();
        camera.look_at(aim);

        let input = LocomotionInput {
            move_intent: self.input.move_intent(),
            running: self.input.is_running(),
            jump_requested: self.input.take_jump_request(),
        };
        let events = self.locomotion.update(
            dt,
            &input,
            self.rig.forward_flat(),
            target,
            env,
            &self.config,
        );

        if events.jumped {
            if let Some(callback) = &mut self.on_jump {
                callback();
            }
        }
        if let Some(moving) = events.movement_changed {
            if let Some(callback) = &mut self.on_movement_change {
                callback(moving);
            }
        }
    }

    /// Teleport the camera rig to its orbital position for the target.
    ///
    /// Call after spawning or teleporting the character.
    pub fn snap_camera(&mut self, target: &Transform) {
        self.rig.snap_to(target.position);
    }

    /// Detach the controller from its input surface.
    ///
    /// Idempotent. After disposal every event entry point and `update` is a
    /// no-op and all buffered input is dropped; safe to call even if the
    /// character asset never finished loading.
    pub fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.input.reset();
        }
    }
}
