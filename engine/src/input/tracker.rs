//! Input State Tracker
//!
//! Accumulates keyboard, pointer-drag, and wheel input into normalized
//! per-frame intents: a unit-length move vector, a run flag, a one-shot jump
//! request, an orbit (drag) delta, and a zoom delta.
//!
//! Everything here is buffered state. Event handlers never touch character
//! position or velocity; the controller consumes the buffered intents at the
//! top of its `update`, with the `consume_*`/`take_*` methods returning the
//! accumulated value and resetting it.

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

/// Pixel-based wheel deltas (touchpads) are normalized into discrete scroll
/// ticks at this many pixels per tick.
const PIXELS_PER_SCROLL_TICK: f32 = 40.0;

/// Buffered input state for one controller instance.
///
/// Key identity uses `winit::keyboard::KeyCode` directly; the rest of the
/// engine input layer is already winit-typed.
#[derive(Debug, Default)]
pub struct InputTracker {
    /// Set of currently depressed keys.
    keys_down: HashSet<KeyCode>,
    /// One-shot jump flag, set on a fresh (non-repeat) press of Space and
    /// consumed exactly once per frame via [`take_jump_request`].
    ///
    /// [`take_jump_request`]: InputTracker::take_jump_request
    jump_requested: bool,
    /// Whether a primary-button drag is in progress.
    dragging: bool,
    /// Last pointer position seen during the active drag, in device pixels.
    last_pointer: Option<(f64, f64)>,
    /// Accumulated drag delta (device pixels) since the last consume.
    orbit_delta: (f32, f32),
    /// Accumulated wheel delta in discrete scroll ticks since last consume.
    zoom_ticks: f32,
}

impl InputTracker {
    /// Create a tracker with no keys down and no buffered deltas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release.
    ///
    /// OS key repeat delivers extra pressed events for a held key; the set
    /// insert only reports an edge for the first one, so a held jump key
    /// requests exactly one jump.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            let fresh = self.keys_down.insert(key);
            if fresh && key == KeyCode::Space {
                self.jump_requested = true;
            }
        } else {
            self.keys_down.remove(&key);
        }
    }

    /// Handle a pointer button press or release.
    ///
    /// A primary-button press begins a drag; release ends it. Non-primary
    /// buttons are ignored.
    pub fn handle_pointer_button(&mut self, button: MouseButton, pressed: bool) {
        if button != MouseButton::Left {
            return;
        }
        if pressed {
            self.dragging = true;
            self.last_pointer = None;
        } else {
            self.end_drag();
        }
    }

    /// Handle pointer motion in window coordinates (device pixels).
    ///
    /// Motion only accumulates while a drag is active; the first motion after
    /// the press establishes the reference position.
    pub fn handle_pointer_motion(&mut self, x: f64, y: f64) {
        if !self.dragging {
            return;
        }
        if let Some((last_x, last_y)) = self.last_pointer {
            self.orbit_delta.0 += (x - last_x) as f32;
            self.orbit_delta.1 += (y - last_y) as f32;
        }
        self.last_pointer = Some((x, y));
    }

    /// Handle a pointer-cancel (cursor left the surface, capture lost).
    ///
    /// Ends the drag and discards any delta accumulated during it, so the
    /// camera does not jump when the pointer returns.
    pub fn handle_pointer_cancel(&mut self) {
        self.end_drag();
        self.orbit_delta = (0.0, 0.0);
    }

    /// Handle a wheel event, accumulating discrete scroll ticks.
    pub fn handle_wheel(&mut self, delta: MouseScrollDelta) {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => self.zoom_ticks += y,
            MouseScrollDelta::PixelDelta(pos) => {
                self.zoom_ticks += pos.y as f32 / PIXELS_PER_SCROLL_TICK;
            }
        }
    }

    /// The window lost keyboard focus: release everything.
    ///
    /// Without this a key held across a focus switch would stay "down"
    /// forever, since its release event goes to another window.
    pub fn handle_focus_lost(&mut self) {
        self.reset();
    }

    fn end_drag(&mut self) {
        self.dragging = false;
        self.last_pointer = None;
    }

    /// Normalized 2D move intent: `x` = strafe (D - A), `y` = forward (W - S).
    ///
    /// Unit length whenever nonzero, so diagonal movement is not faster than
    /// axis-aligned movement.
    pub fn move_intent(&self) -> Vec2 {
        let x = (self.keys_down.contains(&KeyCode::KeyD) as i32
            - self.keys_down.contains(&KeyCode::KeyA) as i32) as f32;
        let z = (self.keys_down.contains(&KeyCode::KeyW) as i32
            - self.keys_down.contains(&KeyCode::KeyS) as i32) as f32;
        Vec2::new(x, z).normalize_or_zero()
    }

    /// True iff either shift key is held.
    pub fn is_running(&self) -> bool {
        self.keys_down.contains(&KeyCode::ShiftLeft)
            || self.keys_down.contains(&KeyCode::ShiftRight)
    }

    /// Consume the one-shot jump request.
    ///
    /// Returns the flag and clears it; the controller calls this exactly once
    /// per frame whether or not a jump can occur, so a press while airborne
    /// is discarded rather than queued for landing.
    pub fn take_jump_request(&mut self) -> bool {
        std::mem::take(&mut self.jump_requested)
    }

    /// Consume the accumulated drag delta in device pixels.
    pub fn consume_orbit_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.orbit_delta)
    }

    /// Consume the accumulated wheel delta in scroll ticks.
    pub fn consume_zoom_ticks(&mut self) -> f32 {
        std::mem::take(&mut self.zoom_ticks)
    }

    /// Whether a primary-button drag is currently active.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the given key is currently held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Reset all buffered state (keys, drag, deltas, jump request).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_intent_single_axis() {
        let mut input = InputTracker::new();
        input.handle_key(KeyCode::KeyW, true);
        assert_eq!(input.move_intent(), Vec2::new(0.0, 1.0));

        input.handle_key(KeyCode::KeyW, false);
        input.handle_key(KeyCode::KeyA, true);
        assert_eq!(input.move_intent(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_move_intent_diagonal_is_unit_length() {
        let mut input = InputTracker::new();
        input.handle_key(KeyCode::KeyW, true);
        input.handle_key(KeyCode::KeyD, true);

        let intent = input.move_intent();
        assert!((intent.length() - 1.0).abs() < 1e-6);
        assert!(intent.x > 0.0 && intent.y > 0.0);
    }

    #[test]
    fn test_move_intent_opposite_keys_cancel() {
        let mut input = InputTracker::new();
        input.handle_key(KeyCode::KeyW, true);
        input.handle_key(KeyCode::KeyS, true);
        assert_eq!(input.move_intent(), Vec2::ZERO);
    }

    #[test]
    fn test_run_flag_either_shift() {
        let mut input = InputTracker::new();
        assert!(!input.is_running());

        input.handle_key(KeyCode::ShiftRight, true);
        assert!(input.is_running());

        input.handle_key(KeyCode::ShiftRight, false);
        assert!(!input.is_running());
    }

    #[test]
    fn test_jump_request_is_edge_triggered() {
        let mut input = InputTracker::new();

        input.handle_key(KeyCode::Space, true);
        assert!(input.take_jump_request());
        // Still held: consuming again yields nothing
        assert!(!input.take_jump_request());

        // OS key repeat while held does not re-trigger
        input.handle_key(KeyCode::Space, true);
        assert!(!input.take_jump_request());

        // Release and press again: a fresh request
        input.handle_key(KeyCode::Space, false);
        input.handle_key(KeyCode::Space, true);
        assert!(input.take_jump_request());
    }

    #[test]
    fn test_drag_accumulates_only_while_dragging() {
        let mut input = InputTracker::new();

        // Motion without a press does nothing
        input.handle_pointer_motion(10.0, 10.0);
        assert_eq!(input.consume_orbit_delta(), (0.0, 0.0));

        input.handle_pointer_button(MouseButton::Left, true);
        input.handle_pointer_motion(100.0, 100.0); // establishes reference
        input.handle_pointer_motion(110.0, 95.0);
        input.handle_pointer_motion(113.0, 97.0);
        assert_eq!(input.consume_orbit_delta(), (13.0, -3.0));

        input.handle_pointer_button(MouseButton::Left, false);
        input.handle_pointer_motion(200.0, 200.0);
        assert_eq!(input.consume_orbit_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_drag_reference_resets_per_press() {
        let mut input = InputTracker::new();

        input.handle_pointer_button(MouseButton::Left, true);
        input.handle_pointer_motion(0.0, 0.0);
        input.handle_pointer_motion(5.0, 0.0);
        input.handle_pointer_button(MouseButton::Left, false);

        // New press far away must not count the gap as a delta
        input.handle_pointer_button(MouseButton::Left, true);
        input.handle_pointer_motion(500.0, 500.0);
        input.handle_pointer_motion(501.0, 500.0);

        assert_eq!(input.consume_orbit_delta(), (6.0, 0.0));
    }

    #[test]
    fn test_pointer_cancel_discards_delta() {
        let mut input = InputTracker::new();
        input.handle_pointer_button(MouseButton::Left, true);
        input.handle_pointer_motion(0.0, 0.0);
        input.handle_pointer_motion(50.0, 50.0);

        input.handle_pointer_cancel();
        assert!(!input.is_dragging());
        assert_eq!(input.consume_orbit_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_non_primary_button_ignored() {
        let mut input = InputTracker::new();
        input.handle_pointer_button(MouseButton::Right, true);
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_wheel_ticks_accumulate() {
        let mut input = InputTracker::new();
        input.handle_wheel(MouseScrollDelta::LineDelta(0.0, 1.0));
        input.handle_wheel(MouseScrollDelta::LineDelta(0.0, 2.0));
        assert_eq!(input.consume_zoom_ticks(), 3.0);
        assert_eq!(input.consume_zoom_ticks(), 0.0);
    }

    #[test]
    fn test_wheel_pixel_delta_normalized() {
        let mut input = InputTracker::new();
        input.handle_wheel(MouseScrollDelta::PixelDelta(
            winit::dpi::PhysicalPosition::new(0.0, -80.0),
        ));
        assert!((input.consume_zoom_ticks() - (-2.0)).abs() < 1e-6);
    }

    #[test]
    fn test_focus_lost_releases_everything() {
        let mut input = InputTracker::new();
        input.handle_key(KeyCode::KeyW, true);
        input.handle_key(KeyCode::ShiftLeft, true);
        input.handle_pointer_button(MouseButton::Left, true);
        input.handle_key(KeyCode::Space, true);

        input.handle_focus_lost();

        assert_eq!(input.move_intent(), Vec2::ZERO);
        assert!(!input.is_running());
        assert!(!input.is_dragging());
        assert!(!input.take_jump_request());
    }
}
