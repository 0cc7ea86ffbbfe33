//! Render Camera Handle
//!
//! The mutable camera object the renderer consumes: a world position and a
//! look-at target. Owned by the rendering side and repositioned by the
//! third-person controller every frame.

use glam::{Mat4, Vec3};

/// A position + aim-point camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// The point the camera is aimed at.
    pub target: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 8.0),
            target: Vec3::ZERO,
        }
    }
}

impl Camera {
    /// Create a camera at `position` aimed at `target`.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Aim the camera directly at a world point.
    #[inline]
    pub fn look_at(&mut self, point: Vec3) {
        self.target = point;
    }

    /// The camera's forward direction, or `-Z` if position and target
    /// coincide.
    pub fn forward(&self) -> Vec3 {
        let dir = self.target - self.position;
        if dir.length_squared() > 1e-8 {
            dir.normalize()
        } else {
            Vec3::NEG_Z
        }
    }

    /// Right-handed view matrix for this pose (`+Y` up).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_at_sets_target() {
        let mut camera = Camera::default();
        camera.look_at(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.target, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_forward_is_normalized() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let forward = camera.forward();
        assert!((forward.length() - 1.0).abs() < 1e-6);
        assert!(forward.z < -0.99);
    }

    #[test]
    fn test_forward_degenerate_fallback() {
        let camera = Camera::new(Vec3::ONE, Vec3::ONE);
        assert_eq!(camera.forward(), Vec3::NEG_Z);
    }

    #[test]
    fn test_view_matrix_transforms_target_onto_neg_z() {
        let camera = Camera::new(Vec3::new(0.0, 1.0, 4.0), Vec3::new(0.0, 1.0, 0.0));
        let view = camera.view_matrix();
        let in_view = view.transform_point3(camera.target);
        // Target lies straight ahead (on -Z) in view space
        assert!(in_view.x.abs() < 1e-5);
        assert!(in_view.y.abs() < 1e-5);
        assert!(in_view.z < 0.0);
    }
}
