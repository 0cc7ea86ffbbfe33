//! Input Module
//!
//! Buffered input state for the third-person controller. Event handlers only
//! write into the tracker; the controller drains the buffered intents once
//! per frame, so any number of events landing between two frames coalesce
//! into a single consistent read.
//!
//! # Example
//!
//! ```rust,ignore
//! use grove_engine::input::InputTracker;
//! use winit::keyboard::KeyCode;
//!
//! let mut input = InputTracker::new();
//!
//! // In the event loop:
//! input.handle_key(KeyCode::KeyW, true);
//! input.handle_key(KeyCode::ShiftLeft, true);
//!
//! // Once per frame:
//! let intent = input.move_intent(); // unit-length (0, 1) here
//! let running = input.is_running();
//! ```

pub mod tracker;

pub use tracker::InputTracker;
