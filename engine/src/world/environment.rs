//! Environment Query View
//!
//! The controller never owns the world: ground height, world bounds, and the
//! obstacle list belong to whatever built the scene. Each frame the owner
//! hands the controller a borrowed [`EnvironmentFrame`] and the controller
//! reads it fresh - nothing from the view is cached across frames, so the
//! collider list is free to change length or content between frames.

use glam::Vec2;

/// Fallback world half-extent when no environment data is supplied.
///
/// Matches the engine's default 10km x 10km world (bounds -5000m to +5000m,
/// 1 unit = 1 meter).
pub const DEFAULT_BOUNDS_HALF_SIZE: f32 = 5000.0;

/// Fallback ground height when no environment data is supplied.
pub const DEFAULT_GROUND_Y: f32 = 0.0;

/// A static circular obstacle in the horizontal (XZ) plane.
///
/// Tree trunks and similar props collide as vertical cylinders, so only the
/// XZ footprint matters to the character controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCollider {
    /// Center of the circle on the XZ plane (`x` = world X, `y` = world Z).
    pub center: Vec2,
    /// Circle radius in meters.
    pub radius: f32,
}

impl CircleCollider {
    /// Create a collider from world XZ coordinates and a radius.
    pub fn new(x: f32, z: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, z),
            radius,
        }
    }
}

/// Read-only, frame-scoped view of the environment around the character.
///
/// Borrowed by [`ThirdPersonController::update`] for exactly one frame. The
/// owner may rebuild the collider slice between frames.
///
/// [`ThirdPersonController::update`]: crate::player::ThirdPersonController::update
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentFrame<'a> {
    /// Height of the (flat) ground the character rests on.
    pub ground_y: f32,
    /// World half-extent: the walkable area spans `[-half, +half]` on X and Z.
    pub bounds_half_size: f32,
    /// Static circular obstacles to resolve against this frame.
    pub tree_colliders: &'a [CircleCollider],
}

impl Default for EnvironmentFrame<'_> {
    /// The documented fallbacks: ground at 0, a large world, no obstacles.
    fn default() -> Self {
        Self {
            ground_y: DEFAULT_GROUND_Y,
            bounds_half_size: DEFAULT_BOUNDS_HALF_SIZE,
            tree_colliders: &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_fallbacks() {
        let env = EnvironmentFrame::default();
        assert_eq!(env.ground_y, 0.0);
        assert_eq!(env.bounds_half_size, DEFAULT_BOUNDS_HALF_SIZE);
        assert!(env.tree_colliders.is_empty());
    }

    #[test]
    fn test_collider_new() {
        let c = CircleCollider::new(3.0, -2.0, 0.5);
        assert_eq!(c.center, Vec2::new(3.0, -2.0));
        assert_eq!(c.radius, 0.5);
    }

    #[test]
    fn test_frame_borrows_live_slice() {
        // The frame is rebuilt per frame over whatever list the owner holds.
        let mut colliders = vec![CircleCollider::new(0.0, 0.0, 1.0)];
        {
            let env = EnvironmentFrame {
                ground_y: 0.0,
                bounds_half_size: 100.0,
                tree_colliders: &colliders,
            };
            assert_eq!(env.tree_colliders.len(), 1);
        }

        colliders.push(CircleCollider::new(5.0, 5.0, 0.4));
        let env = EnvironmentFrame {
            ground_y: 0.0,
            bounds_half_size: 100.0,
            tree_colliders: &colliders,
        };
        assert_eq!(env.tree_colliders.len(), 2);
    }
}
