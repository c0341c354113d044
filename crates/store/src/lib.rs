//! Saved-game persistence.
//!
//! Stores one record per player: the date it belongs to, whether it was
//! completed, the move count and the current grid. The game loop only ever
//! restores a record whose date is today; anything else is cleared.
//! Failures here never end a session; see [`load_for_day`].

pub mod error;
pub mod record;
pub mod store;

pub use tui_hue_core as core;
pub use tui_hue_types as types;

pub use error::StoreError;
pub use record::{ColorLower, SavedGame};
pub use store::{clear_or_warn, load_for_day, save_or_warn, FileStore, GameStore, MemoryStore};
