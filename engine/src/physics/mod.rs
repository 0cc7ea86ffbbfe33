//! Physics Module
//!
//! Custom character-scale physics, built from scratch without an external
//! physics library dependency (no Rapier). The character is a circle on the
//! XZ plane; obstacles are static circles; the world edge is a hard clamp.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²

pub mod collision;

pub use collision::{clamp_to_bounds, resolve_circle_overlap, resolve_colliders};
