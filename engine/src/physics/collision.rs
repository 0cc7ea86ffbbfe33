//! Collision Resolution
//!
//! Circle-vs-circle collision resolution in the horizontal plane, plus the
//! hard world-bounds clamp. The character is treated as a vertical cylinder,
//! so only its XZ footprint participates; obstacles (tree trunks) are static
//! circles supplied by the environment view each frame.
//!
//! # Resolution model
//!
//! On overlap the character is pushed out along the separating normal by the
//! penetration depth, and the velocity component pointing into the obstacle
//! is removed. Tangential velocity survives, so the character slides along
//! an obstacle surface instead of sticking to it.
//!
//! # Example
//!
//! ```ignore
//! use grove_engine::physics::resolve_colliders;
//! use grove_engine::world::CircleCollider;
//! use glam::Vec3;
//!
//! let colliders = [CircleCollider::new(0.0, 0.0, 0.5)];
//! let (position, velocity) = resolve_colliders(position, velocity, 0.4, &colliders);
//! ```

use glam::{Vec2, Vec3};

use crate::world::CircleCollider;

/// Squared-distance threshold below which two circle centers are considered
/// coincident and the fallback separation normal is used instead.
const DEGENERATE_DIST_SQ: f32 = 1e-8;

/// Resolve the character circle against a single static collider.
///
/// Operates on the XZ components only; `position.y` and `velocity.y` pass
/// through untouched.
///
/// # Arguments
///
/// * `position` - Character position (feet) in world space
/// * `velocity` - Character velocity in world space
/// * `radius` - Character collision radius
/// * `collider` - The static obstacle circle
///
/// # Returns
///
/// The corrected `(position, velocity)` pair. Unchanged when there is no
/// overlap.
pub fn resolve_circle_overlap(
    position: Vec3,
    velocity: Vec3,
    radius: f32,
    collider: &CircleCollider,
) -> (Vec3, Vec3) {
    let to_character = Vec2::new(position.x, position.z) - collider.center;
    let min_dist = radius + collider.radius;
    let dist_sq = to_character.length_squared();

    if dist_sq >= min_dist * min_dist {
        return (position, velocity);
    }

    // Separating normal, with a fixed fallback when the centers coincide
    let normal = if dist_sq < DEGENERATE_DIST_SQ {
        Vec2::X
    } else {
        to_character / dist_sq.sqrt()
    };

    let penetration = min_dist - dist_sq.sqrt();
    let corrected = Vec3::new(
        position.x + normal.x * penetration,
        position.y,
        position.z + normal.y * penetration,
    );

    // Remove the velocity component pointing into the collider; keep the
    // tangential part so sliding along the surface is preserved.
    let horizontal_velocity = Vec2::new(velocity.x, velocity.z);
    let into_surface = horizontal_velocity.dot(-normal);
    let corrected_velocity = if into_surface > 0.0 {
        let remaining = horizontal_velocity + normal * into_surface;
        Vec3::new(remaining.x, velocity.y, remaining.y)
    } else {
        velocity
    };

    (corrected, corrected_velocity)
}

/// Resolve the character circle against every collider in a frame's list.
///
/// Colliders are resolved in order; each resolution sees the effect of the
/// previous one.
pub fn resolve_colliders(
    mut position: Vec3,
    mut velocity: Vec3,
    radius: f32,
    colliders: &[CircleCollider],
) -> (Vec3, Vec3) {
    for collider in colliders {
        let (p, v) = resolve_circle_overlap(position, velocity, radius, collider);
        position = p;
        velocity = v;
    }
    (position, velocity)
}

/// Clamp a position to the world bounds on X and Z.
///
/// A hard stop, not a bounce: velocity is left alone, so the character can
/// push against the boundary without sliding back. `margin` keeps the
/// character's collision circle inside the edge.
pub fn clamp_to_bounds(position: Vec3, half_size: f32, margin: f32) -> Vec3 {
    let limit = (half_size - margin).max(0.0);
    Vec3::new(
        position.x.clamp(-limit, limit),
        position.y,
        position.z.clamp(-limit, limit),
    )
}
