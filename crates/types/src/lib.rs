//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (puzzle logic, terminal rendering, persistence).
//!
//! # Grid Dimensions
//!
//! The daily puzzle is a square grid of [`GRID_SIZE`] x [`GRID_SIZE`] tiles
//! (4x4, indexed 0-3 in both directions). Positions are `(row, col)` with row 0
//! at the top.
//!
//! # Colors
//!
//! Exactly four tile colors exist. Their display values:
//!
//! | Color | Hex | Share glyph |
//! |-------|-----|-------------|
//! | Red | `#fb607f` | 🟥 |
//! | Green | `#84dcc6` | 🟩 |
//! | Blue | `#89cff0` | 🟦 |
//! | Yellow | `#f8de7e` | 🟨 |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SWAP_ANIMATION_MS` | 150 | Tile swap transition before the swap commits |
//!
//! # Examples
//!
//! ```
//! use tui_hue_types::{Color, Position, COLORS, GRID_SIZE};
//!
//! assert_eq!(COLORS[1], Color::Green);
//! assert_eq!(Color::Green.rgb(), (0x84, 0xdc, 0xc6));
//!
//! let pos = Position::new(1, 2);
//! assert_eq!(pos.row, 1);
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid dimension in tiles (4x4)
pub const GRID_SIZE: usize = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration of the swap transition; input is ignored until it completes.
pub const SWAP_ANIMATION_MS: u32 = 150;

/// Tile colors
///
/// Equality is by value; nothing about a tile is derived from its color beyond
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

/// All colors in generator order.
///
/// The generator indexes this array, so the order is part of the daily puzzle
/// and must not change.
pub const COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

impl Color {
    /// Display color as `(r, g, b)`.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Red => (0xfb, 0x60, 0x7f),
            Color::Green => (0x84, 0xdc, 0xc6),
            Color::Blue => (0x89, 0xcf, 0xf0),
            Color::Yellow => (0xf8, 0xde, 0x7e),
        }
    }
}

/// A tile coordinate on the grid
///
/// Two positions are equal iff both components match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Actions that can be applied to a puzzle session
///
/// Produced by the key map and consumed by the session. Cursor moves clamp at
/// the grid edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one tile up
    CursorUp,
    /// Move the cursor one tile down
    CursorDown,
    /// Move the cursor one tile left
    CursorLeft,
    /// Move the cursor one tile right
    CursorRight,
    /// Click the tile under the cursor (select, deselect or swap)
    Select,
    /// Restore the day's original grid and zero the move counter
    Reset,
    /// Hide the win overlay, or clear the selection
    Dismiss,
    /// Copy the share text
    Share,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_color_order_is_stable() {
        assert_eq!(
            COLORS,
            [Color::Red, Color::Green, Color::Blue, Color::Yellow]
        );
    }

    #[test]
    fn color_rgb_matches_palette() {
        assert_eq!(Color::Red.rgb(), (251, 96, 127));
        assert_eq!(Color::Green.rgb(), (132, 220, 198));
        assert_eq!(Color::Blue.rgb(), (137, 207, 240));
        assert_eq!(Color::Yellow.rgb(), (248, 222, 126));
    }

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(SWAP_ANIMATION_MS, 150);
    }
}
