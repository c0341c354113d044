//! Puzzle session layer.
//!
//! Wraps the stateless [`tui_hue_core`] rules with the state a game keeps
//! between inputs: selection, cursor, move counter, the swap transition and
//! the `NotStarted -> InProgress -> Solved` lifecycle. Also formats the share
//! text for a finished puzzle.

pub mod session;
pub mod share;
pub mod snapshot;

pub use tui_hue_core as core;
pub use tui_hue_types as types;

pub use session::{ClickOutcome, Session, SessionEvent};
pub use share::{glyph, grid_glyphs, share_text};
pub use snapshot::{Phase, SessionSnapshot, SwapTransition};
