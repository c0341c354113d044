//! On-disk saved game record.
//!
//! ```json
//! {"date":"2026-01-13","completed":false,"moves":3,"grid":[["red","green",...],...]}
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{date_string, parse_date, Grid};
use crate::error::StoreError;
use crate::types::{Color, COLORS, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorLower {
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "yellow")]
    Yellow,
}

impl From<Color> for ColorLower {
    fn from(value: Color) -> Self {
        match value {
            Color::Red => Self::Red,
            Color::Green => Self::Green,
            Color::Blue => Self::Blue,
            Color::Yellow => Self::Yellow,
        }
    }
}

impl From<ColorLower> for Color {
    fn from(value: ColorLower) -> Self {
        match value {
            ColorLower::Red => Color::Red,
            ColorLower::Green => Color::Green,
            ColorLower::Blue => Color::Blue,
            ColorLower::Yellow => Color::Yellow,
        }
    }
}

/// Persisted progress on one day's puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// `YYYY-MM-DD`
    pub date: String,
    pub completed: bool,
    pub moves: u32,
    pub grid: Vec<Vec<ColorLower>>,
}

impl SavedGame {
    pub fn capture(date: NaiveDate, grid: &Grid, moves: u32, completed: bool) -> Self {
        Self {
            date: date_string(date),
            completed,
            moves,
            grid: grid
                .rows()
                .iter()
                .map(|row| row.iter().copied().map(ColorLower::from).collect())
                .collect(),
        }
    }

    pub fn parsed_date(&self) -> Result<NaiveDate, StoreError> {
        parse_date(&self.date).ok_or_else(|| StoreError::InvalidDate(self.date.clone()))
    }

    /// Rebuild the grid, rejecting anything that is not `GRID_SIZE` square.
    pub fn to_grid(&self) -> Result<Grid, StoreError> {
        let invalid = || StoreError::InvalidGrid {
            rows: self.grid.len(),
            cols: self.grid.iter().map(Vec::len).max().unwrap_or(0),
            expected: GRID_SIZE,
        };

        if self.grid.len() != GRID_SIZE {
            return Err(invalid());
        }

        let mut cells = [[COLORS[0]; GRID_SIZE]; GRID_SIZE];
        for (row, saved) in cells.iter_mut().zip(&self.grid) {
            if saved.len() != GRID_SIZE {
                return Err(invalid());
            }
            for (cell, &color) in row.iter_mut().zip(saved) {
                *cell = color.into();
            }
        }
        Ok(Grid::from_rows(cells))
    }
}
