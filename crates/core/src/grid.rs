//! Grid module - the puzzle's tile grid
//!
//! The grid is a square array of colors stored by value. It is `Copy`, and no
//! operation mutates a grid in place: [`Grid::swap`] and friends return a new
//! grid and leave the receiver untouched.
//! Coordinates: `(row, col)` where row 0 is the top row.

use std::ops::Index;

use chrono::NaiveDate;

use crate::day::day_number;
use crate::rng::SeededRng;
use crate::types::{Color, Position, COLORS, GRID_SIZE};

/// An N x N grid of tile colors, row-major.
///
/// The dimension is a const parameter defaulting to [`GRID_SIZE`]; smaller
/// grids are mostly useful in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid<const N: usize = GRID_SIZE> {
    cells: [[Color; N]; N],
}

impl<const N: usize> Grid<N> {
    /// Build a grid from explicit rows.
    pub const fn from_rows(cells: [[Color; N]; N]) -> Self {
        Self { cells }
    }

    /// Build a grid with every tile set to `color`.
    pub fn filled(color: Color) -> Self {
        Self {
            cells: [[color; N]; N],
        }
    }

    /// Deterministically generate a grid from a seed.
    ///
    /// Cells are filled row-major, each picking `COLORS[floor(rng() * 4)]`.
    pub fn from_seed(seed: i64) -> Self {
        let mut rng = SeededRng::new(seed);
        let mut cells = [[COLORS[0]; N]; N];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = COLORS[rng.next_index(COLORS.len())];
            }
        }
        Self { cells }
    }

    /// Grid dimension (tiles per side)
    pub const fn size(&self) -> usize {
        N
    }

    /// Check if position is within bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < N && pos.col < N
    }

    /// Get the color at a position
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Color> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> &[[Color; N]; N] {
        &self.cells
    }

    /// All positions in row-major order
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..N).flat_map(|row| (0..N).map(move |col| Position::new(row, col)))
    }

    /// In-bounds orthogonal neighbors of `pos` (up, down, left, right)
    pub fn neighbors(pos: Position) -> impl Iterator<Item = Position> {
        let up = pos.row.checked_sub(1).map(|row| Position::new(row, pos.col));
        let down = (pos.row + 1 < N).then(|| Position::new(pos.row + 1, pos.col));
        let left = pos.col.checked_sub(1).map(|col| Position::new(pos.row, col));
        let right = (pos.col + 1 < N).then(|| Position::new(pos.row, pos.col + 1));
        [up, down, left, right].into_iter().flatten()
    }

    /// Distinct colors present on the grid, in [`COLORS`] order
    pub fn distinct_colors(&self) -> Vec<Color> {
        COLORS
            .into_iter()
            .filter(|color| self.cells.iter().flatten().any(|c| c == color))
            .collect()
    }

    /// Return a new grid with the tiles at `a` and `b` exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds. The receiver is never
    /// modified either way.
    pub fn swap(&self, a: Position, b: Position) -> Self {
        assert!(self.contains(a), "swap position {:?} outside {}x{} grid", a, N, N);
        assert!(self.contains(b), "swap position {:?} outside {}x{} grid", b, N, N);

        let mut next = *self;
        next.cells[a.row][a.col] = self.cells[b.row][b.col];
        next.cells[b.row][b.col] = self.cells[a.row][a.col];
        next
    }
}

impl<const N: usize> Index<Position> for Grid<N> {
    type Output = Color;

    fn index(&self, pos: Position) -> &Color {
        &self.cells[pos.row][pos.col]
    }
}

/// Generate the puzzle grid for a calendar day.
///
/// The seed is the day number, so every date maps to exactly one grid. No
/// check is made that the grid is solvable or not already solved.
pub fn generate_daily_grid(date: NaiveDate) -> Grid {
    Grid::from_seed(day_number(date))
}

/// True iff `a` and `b` are orthogonal neighbors (Manhattan distance 1).
pub fn is_adjacent(a: Position, b: Position) -> bool {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col) == 1
}

/// Swap two tiles and return the new grid. See [`Grid::swap`].
pub fn swap_tiles<const N: usize>(grid: &Grid<N>, a: Position, b: Position) -> Grid<N> {
    grid.swap(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue as B, Green as G, Red as R, Yellow as Y};

    #[test]
    fn test_from_seed_matches_known_grid() {
        // Day 20466 is 2026-01-13.
        let grid: Grid = Grid::from_seed(20466);
        assert_eq!(
            grid,
            Grid::from_rows([
                [R, G, Y, G],
                [Y, R, G, G],
                [R, R, R, B],
                [G, Y, B, B],
            ])
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid: Grid<2> = Grid::filled(R);
        assert_eq!(grid.get(Position::new(1, 1)), Some(R));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(0, 2)), None);
    }

    #[test]
    fn test_positions_row_major() {
        let all: Vec<_> = Grid::<2>::positions().collect();
        assert_eq!(
            all,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_neighbors_clip_at_edges() {
        let corner: Vec<_> = Grid::<3>::neighbors(Position::new(0, 0)).collect();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);

        let center: Vec<_> = Grid::<3>::neighbors(Position::new(1, 1)).collect();
        assert_eq!(center.len(), 4);

        let far: Vec<_> = Grid::<3>::neighbors(Position::new(2, 2)).collect();
        assert_eq!(far, vec![Position::new(1, 2), Position::new(2, 1)]);
    }

    #[test]
    fn test_distinct_colors_skips_absent() {
        let grid = Grid::from_rows([[R, B], [B, R]]);
        assert_eq!(grid.distinct_colors(), vec![R, B]);
    }

    #[test]
    fn test_swap_leaves_original_untouched() {
        let grid = Grid::from_rows([[R, G], [B, Y]]);
        let swapped = grid.swap(Position::new(0, 0), Position::new(0, 1));
        assert_eq!(grid, Grid::from_rows([[R, G], [B, Y]]));
        assert_eq!(swapped, Grid::from_rows([[G, R], [B, Y]]));
    }

    #[test]
    #[should_panic(expected = "outside 2x2 grid")]
    fn test_swap_out_of_bounds_panics() {
        let grid: Grid<2> = Grid::filled(R);
        let _ = grid.swap(Position::new(0, 0), Position::new(0, 2));
    }

    #[test]
    fn test_adjacency() {
        let p = Position::new(1, 1);
        assert!(is_adjacent(p, Position::new(0, 1)));
        assert!(is_adjacent(p, Position::new(1, 2)));
        assert!(!is_adjacent(p, p));
        assert!(!is_adjacent(p, Position::new(2, 2)));
        assert!(!is_adjacent(p, Position::new(1, 3)));
    }

    #[test]
    fn test_index_by_position() {
        let grid = Grid::from_rows([[R, G], [B, Y]]);
        assert_eq!(grid[Position::new(1, 0)], B);
    }
}
