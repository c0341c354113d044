//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Independent
//! of any UI framework; the puzzle has no held keys, so presses are all that
//! matter.

pub mod map;

pub use tui_hue_types as types;

pub use map::{handle_key_event, should_quit};
