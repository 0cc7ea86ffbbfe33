//! Camera Module
//!
//! Orbit camera rig and the render-facing camera handle. This module is
//! window-system agnostic - it only deals with camera state and math; input
//! deltas are computed elsewhere and applied via `rotate`/`zoom`.

pub mod rig;
pub mod view;

pub use rig::OrbitRig;
pub use view::Camera;
