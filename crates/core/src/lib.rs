//! Puzzle core - pure, deterministic, and testable
//!
//! This crate contains the rules of the daily color puzzle. It has **zero
//! dependencies** on UI, persistence, or I/O, and keeps no state between
//! calls:
//!
//! - **Deterministic**: the same calendar day always produces the same grid
//! - **Immutable**: every operation that "changes" a grid returns a new one
//! - **Thread-safe**: grids are plain `Copy` values, no locks needed
//!
//! # Module Structure
//!
//! - [`rng`]: seeded linear congruential generator
//! - [`day`]: day numbers, date strings, puzzle numbers
//! - [`grid`]: the grid value, daily generation, adjacency and swaps
//! - [`regions`]: connected-region counting and win detection
//!
//! # Rules
//!
//! - The grid is 4x4 with four colors
//! - Only orthogonally adjacent tiles can be swapped
//! - The puzzle is solved when each color present forms one connected region
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tui_hue_core::{check_win, generate_daily_grid, is_adjacent, swap_tiles};
//! use tui_hue_types::Position;
//!
//! let date = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
//! let grid = generate_daily_grid(date);
//! assert_eq!(grid, generate_daily_grid(date));
//!
//! let (a, b) = (Position::new(0, 0), Position::new(0, 1));
//! assert!(is_adjacent(a, b));
//!
//! let next = swap_tiles(&grid, a, b);
//! assert_eq!(next[a], grid[b]);
//! assert!(!check_win(&next));
//! ```

pub mod day;
pub mod grid;
pub mod regions;
pub mod rng;

pub use tui_hue_types as types;

// Re-export commonly used items for convenience
pub use day::{date_string, day_number, day_number_at, parse_date, puzzle_number, today};
pub use grid::{generate_daily_grid, is_adjacent, swap_tiles, Grid};
pub use regions::{check_win, count_regions};
pub use rng::SeededRng;
