//! Orbit Camera Rig
//!
//! Places the camera on a sphere around an aim point above the followed
//! character, from three orbital parameters:
//!
//! - `yaw` - horizontal orbit angle (unrestricted)
//! - `phi` - polar angle measured from the vertical axis (`phi -> 0` is
//!   directly overhead, `phi -> PI` directly below), clamped so the camera
//!   stays between a low angle and near-overhead
//! - `distance` - orbit radius, clamped to a zoom range
//!
//! The desired position is recomputed every frame; the actual position is
//! exponentially damped toward it, so the camera trails a sprinting or
//! teleporting character smoothly. Orientation never lags: the camera is
//! re-aimed at the exact aim point every frame.

use glam::Vec3;

use crate::math::damp_vec3;

/// Orbit camera rig state.
///
/// Angle/zoom clamps and smoothing rates live on the rig itself; the
/// controller fills them in from its configuration.
#[derive(Debug, Clone)]
pub struct OrbitRig {
    /// Horizontal orbit angle in radians.
    pub yaw: f32,
    /// Polar angle from the vertical axis in radians, kept within
    /// `[min_phi, max_phi]`.
    pub phi: f32,
    /// Orbit radius in meters, kept within `[min_distance, max_distance]`.
    pub distance: f32,
    /// Lower polar-angle limit (near-overhead).
    pub min_phi: f32,
    /// Upper polar-angle limit (low angle).
    pub max_phi: f32,
    /// Closest allowed zoom.
    pub min_distance: f32,
    /// Farthest allowed zoom.
    pub max_distance: f32,
    /// Height of the aim point above the character's feet.
    pub target_height: f32,
    /// Position smoothing response (damping lambda).
    pub smoothing: f32,
    /// Smoothed world-space camera position.
    position: Vec3,
    /// Aim point computed by the most recent update.
    aim_point: Vec3,
    /// False until the first update snaps the position into place.
    initialized: bool,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            phi: 1.05,
            distance: 5.5,
            min_phi: 0.3,
            max_phi: 1.45,
            min_distance: 2.5,
            max_distance: 12.0,
            target_height: 1.6,
            smoothing: 8.0,
            position: Vec3::ZERO,
            aim_point: Vec3::ZERO,
            initialized: false,
        }
    }
}

impl OrbitRig {
    /// Create a rig with default orbit parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an orbit rotation delta, clamping the polar angle.
    pub fn rotate(&mut self, delta_yaw: f32, delta_phi: f32) {
        self.yaw += delta_yaw;
        self.phi = (self.phi + delta_phi).clamp(self.min_phi, self.max_phi);
    }

    /// Apply a zoom delta in meters, clamping to the zoom range.
    pub fn zoom(&mut self, delta_distance: f32) {
        self.distance = (self.distance + delta_distance).clamp(self.min_distance, self.max_distance);
    }

    /// The smoothed camera position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The aim point from the most recent update.
    #[inline]
    pub fn aim_point(&self) -> Vec3 {
        self.aim_point
    }

    /// Desired (unsmoothed) camera pose for a character position:
    /// `(aim_point, camera_position)`.
    ///
    /// Spherical-to-Cartesian with `phi` measured from +Y:
    /// `offset = (sin(phi) sin(yaw), cos(phi), sin(phi) cos(yaw)) * distance`.
    pub fn desired_pose(&self, character_position: Vec3) -> (Vec3, Vec3) {
        let aim = character_position + Vec3::new(0.0, self.target_height, 0.0);
        let offset = Vec3::new(
            self.phi.sin() * self.yaw.sin(),
            self.phi.cos(),
            self.phi.sin() * self.yaw.cos(),
        ) * self.distance;
        (aim, aim + offset)
    }

    /// Advance the rig one frame: damp the position toward the desired pose
    /// and return the exact aim point for the render camera to look at.
    ///
    /// The first update snaps into place instead of gliding in from the
    /// rig's zero state.
    pub fn update(&mut self, dt: f32, character_position: Vec3) -> Vec3 {
        let (aim, desired) = self.desired_pose(character_position);

        if self.initialized {
            self.position = damp_vec3(self.position, desired, self.smoothing, dt);
        } else {
            self.position = desired;
            self.initialized = true;
        }

        self.aim_point = aim;
        aim
    }

    /// Teleport the rig to the desired pose for `character_position`.
    ///
    /// Use after spawning or teleporting the character so the camera does not
    /// glide across the world.
    pub fn snap_to(&mut self, character_position: Vec3) {
        let (aim, desired) = self.desired_pose(character_position);
        self.position = desired;
        self.aim_point = aim;
        self.initialized = true;
    }

    /// Camera look direction flattened to the horizontal plane.
    ///
    /// Unit length. Falls back to `-Z` when the look direction is degenerate
    /// (camera directly above the aim point).
    pub fn forward_flat(&self) -> Vec3 {
        let look = self.aim_point - self.position;
        let flat = Vec3::new(look.x, 0.0, look.z);
        if flat.length_squared() > 1e-8 {
            flat.normalize()
        } else {
            Vec3::NEG_Z
        }
    }

    /// Camera right direction on the horizontal plane.
    pub fn right_flat(&self) -> Vec3 {
        self.forward_flat().cross(Vec3::Y).normalize_or_zero()
    }
}
