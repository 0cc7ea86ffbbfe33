//! Exponential Damping
//!
//! Frame-rate independent smoothing toward a target value:
//!
//!   `value += (target - value) * (1 - exp(-lambda * dt))`
//!
//! The blend factor depends only on `lambda * dt`, so convergence speed is
//! the same at 30 fps and 144 fps. Convergence is monotone: the value never
//! overshoots the target for any `lambda > 0` and `dt >= 0`.

use glam::Vec3;

/// Time-based blend factor `1 - exp(-lambda * dt)`.
///
/// This is the factor to feed `lerp`/`slerp` when smoothing vectors or
/// rotations with the same frame-rate independence as [`damp`].
#[inline]
pub fn damp_factor(lambda: f32, dt: f32) -> f32 {
    1.0 - (-lambda * dt).exp()
}

/// Move `current` toward `target` with exponential decay.
///
/// `lambda` controls responsiveness (higher = snappier); useful values for
/// camera and movement smoothing sit roughly in the 5-20 range.
#[inline]
pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    current + (target - current) * damp_factor(lambda, dt)
}

/// Component-wise [`damp`] for vectors.
#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, lambda: f32, dt: f32) -> Vec3 {
    current + (target - current) * damp_factor(lambda, dt)
}

/// Wrap an angle in radians to the `(-PI, PI]` range.
pub fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}
