//! Controller Configuration
//!
//! All tuning for a controller instance, fixed at construction. `Default`
//! carries the demo tuning; `validate` rejects configurations that would
//! produce silently-wrong behavior (inverted clamp ranges, non-positive
//! speeds) so a bad config fails at construction instead of mid-walk.

use std::fmt;

/// Walk speed in meters per second.
pub const WALK_SPEED: f32 = 4.6;

/// Run speed in meters per second.
pub const RUN_SPEED: f32 = 8.0;

/// Jump launch velocity in meters per second.
pub const JUMP_SPEED: f32 = 7.2;

/// Gravity acceleration in meters per second squared.
pub const GRAVITY: f32 = 18.5;

/// Hard ceiling on a single frame's `dt` in seconds.
///
/// Frame hitches larger than this are truncated rather than integrated, so a
/// stall can never tunnel the character through the ground or an obstacle.
pub const MAX_FRAME_DT: f32 = 0.05;

/// Immutable per-instance tuning for [`ThirdPersonController`].
///
/// [`ThirdPersonController`]: super::ThirdPersonController
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Height of the camera aim point above the character's feet (meters).
    pub target_height: f32,
    /// Character collision radius (meters); also the world-bounds margin.
    pub player_radius: f32,
    /// Walk speed (m/s).
    pub walk_speed: f32,
    /// Run speed while shift is held (m/s).
    pub run_speed: f32,
    /// Jump launch velocity (m/s).
    pub jump_speed: f32,
    /// Gravity acceleration (m/s²).
    pub gravity: f32,
    /// Facing-rotation smoothing response (damping lambda).
    pub rotation_response: f32,
    /// Horizontal velocity response while there is move input.
    pub accel_response: f32,
    /// Horizontal velocity response while coasting to a stop. Lower than
    /// `accel_response`: starting to move is snappier than stopping.
    pub decel_response: f32,
    /// Closest allowed camera distance (meters).
    pub min_distance: f32,
    /// Farthest allowed camera distance (meters).
    pub max_distance: f32,
    /// Camera distance at startup (clamped into the zoom range).
    pub initial_distance: f32,
    /// Smallest polar angle from vertical (near-overhead limit), radians.
    pub min_phi: f32,
    /// Largest polar angle from vertical (low-angle limit), radians.
    pub max_phi: f32,
    /// Polar angle at startup (clamped into the phi range).
    pub initial_phi: f32,
    /// Orbit yaw at startup, radians.
    pub initial_yaw: f32,
    /// Camera position smoothing response (damping lambda).
    pub camera_smoothing: f32,
    /// Orbit radians per device pixel of drag.
    pub rotate_sensitivity: f32,
    /// Camera distance change per wheel tick (meters).
    pub zoom_step: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            target_height: 1.6,
            player_radius: 0.4,
            walk_speed: WALK_SPEED,
            run_speed: RUN_SPEED,
            jump_speed: JUMP_SPEED,
            gravity: GRAVITY,
            rotation_response: 10.0,
            accel_response: 12.0,
            decel_response: 8.0,
            min_distance: 2.5,
            max_distance: 12.0,
            initial_distance: 5.5,
            min_phi: 0.3,
            max_phi: 1.45,
            initial_phi: 1.05,
            initial_yaw: 0.0,
            camera_smoothing: 8.0,
            rotate_sensitivity: 0.005,
            zoom_step: 0.75,
        }
    }
}

impl ControllerConfig {
    /// Check the configuration for values that would produce broken motion.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_distance <= 0.0 || self.min_distance > self.max_distance {
            return Err(ConfigError::InvalidDistanceRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        if self.min_phi <= 0.0
            || self.min_phi > self.max_phi
            || self.max_phi >= std::f32::consts::PI
        {
            return Err(ConfigError::InvalidPhiRange {
                min: self.min_phi,
                max: self.max_phi,
            });
        }

        let positives = [
            ("target_height", self.target_height),
            ("player_radius", self.player_radius),
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("jump_speed", self.jump_speed),
            ("gravity", self.gravity),
            ("rotation_response", self.rotation_response),
            ("accel_response", self.accel_response),
            ("decel_response", self.decel_response),
            ("camera_smoothing", self.camera_smoothing),
        ];
        for (name, value) in positives {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        let non_negatives = [
            ("rotate_sensitivity", self.rotate_sensitivity),
            ("zoom_step", self.zoom_step),
        ];
        for (name, value) in non_negatives {
            if !(value >= 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        Ok(())
    }
}

/// A configuration value that would produce silently-wrong behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `min_distance` is non-positive or exceeds `max_distance`.
    InvalidDistanceRange { min: f32, max: f32 },
    /// The phi clamp range is empty or leaves the valid `(0, PI)` interval.
    InvalidPhiRange { min: f32, max: f32 },
    /// A value that must be positive (or NaN where a number is required).
    NonPositive { name: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDistanceRange { min, max } => {
                write!(f, "invalid camera distance range: min {min} .. max {max}")
            }
            ConfigError::InvalidPhiRange { min, max } => {
                write!(f, "invalid camera phi range: min {min} .. max {max}")
            }
            ConfigError::NonPositive { name, value } => {
                write!(f, "configuration value `{name}` must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
