//! Connectivity analysis and win detection
//!
//! A region is a maximal set of same-colored tiles connected through
//! orthogonal steps. The puzzle is solved when every color present on the
//! grid forms exactly one region.

use crate::grid::Grid;
use crate::types::{Color, Position};

/// Count the connected regions of `color`.
///
/// Iterative flood fill with an explicit stack; each tile is visited at most
/// once, so this is O(N²). Returns 0 when the color is absent.
pub fn count_regions<const N: usize>(grid: &Grid<N>, color: Color) -> usize {
    let mut visited = [[false; N]; N];
    let mut stack: Vec<Position> = Vec::with_capacity(N * N);
    let mut regions = 0;

    for start in Grid::<N>::positions() {
        if visited[start.row][start.col] || grid[start] != color {
            continue;
        }

        regions += 1;
        visited[start.row][start.col] = true;
        stack.push(start);

        while let Some(pos) = stack.pop() {
            for next in Grid::<N>::neighbors(pos) {
                if !visited[next.row][next.col] && grid[next] == color {
                    visited[next.row][next.col] = true;
                    stack.push(next);
                }
            }
        }
    }

    regions
}

/// True iff every distinct color on the grid forms exactly one region.
///
/// Colors absent from the grid are ignored, so a 0x0 grid is trivially solved.
pub fn check_win<const N: usize>(grid: &Grid<N>) -> bool {
    grid.distinct_colors()
        .into_iter()
        .all(|color| count_regions(grid, color) == 1)
}
