//! Character Transform Handle
//!
//! The character's root transform is owned by whoever loaded the model; the
//! controller borrows it mutably for the duration of each update and is the
//! only writer during that frame.

use glam::{Quat, Vec3};

/// Mutable position + orientation handle for the controlled character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position of the character's feet.
    pub position: Vec3,
    /// World-space orientation. Identity faces `+Z`.
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a transform at `position` with identity orientation.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// The direction the character is facing (`+Z` rotated by `rotation`).
    pub fn facing(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// The facing direction as a yaw angle, `atan2(x, z)` convention.
    pub fn facing_yaw(&self) -> f32 {
        let f = self.facing();
        f.x.atan2(f.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_faces_positive_z() {
        let t = Transform::default();
        let f = t.facing();
        assert!((f - Vec3::Z).length() < 1e-6);
        assert!(t.facing_yaw().abs() < 1e-6);
    }

    #[test]
    fn test_yaw_rotation_turns_facing() {
        use std::f32::consts::FRAC_PI_2;

        let t = Transform {
            position: Vec3::ZERO,
            rotation: Quat::from_rotation_y(FRAC_PI_2),
        };
        let f = t.facing();
        // Quarter turn about Y maps +Z onto +X
        assert!((f - Vec3::X).length() < 1e-5);
        assert!((t.facing_yaw() - FRAC_PI_2).abs() < 1e-5);
    }
}
