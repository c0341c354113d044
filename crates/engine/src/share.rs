//! Share text: the spoiler-free result card copied to the clipboard.

use chrono::NaiveDate;

use crate::core::{puzzle_number, Grid};
use crate::types::Color;

/// Fixed one-character glyph for each color.
pub fn glyph(color: Color) -> char {
    match color {
        Color::Red => '🟥',
        Color::Green => '🟩',
        Color::Blue => '🟦',
        Color::Yellow => '🟨',
    }
}

/// Render the grid as glyph rows joined by newlines.
pub fn grid_glyphs<const N: usize>(grid: &Grid<N>) -> String {
    grid.rows()
        .iter()
        .map(|row| row.iter().copied().map(glyph).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the shareable result for a solved puzzle.
///
/// ```
/// use chrono::NaiveDate;
/// use tui_hue_core::Grid;
/// use tui_hue_engine::share_text;
/// use tui_hue_types::Color;
///
/// let grid: Grid<2> = Grid::filled(Color::Red);
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// assert_eq!(
///     share_text(&grid, 3, date),
///     "Hue #2\n✅ Solved in 3 moves\n\n🟥🟥\n🟥🟥"
/// );
/// ```
pub fn share_text<const N: usize>(grid: &Grid<N>, moves: u32, date: NaiveDate) -> String {
    format!(
        "Hue #{}\n✅ Solved in {} moves\n\n{}",
        puzzle_number(date),
        moves,
        grid_glyphs(grid)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::COLORS;
    use Color::{Blue as B, Green as G, Red as R, Yellow as Y};

    #[test]
    fn glyphs_are_distinct() {
        let mut glyphs: Vec<char> = COLORS.into_iter().map(glyph).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), COLORS.len());
    }

    #[test]
    fn grid_glyphs_keep_row_order() {
        let grid = Grid::from_rows([[R, G], [B, Y]]);
        assert_eq!(grid_glyphs(&grid), "🟥🟩\n🟦🟨");
    }

    #[test]
    fn launch_day_is_puzzle_one() {
        let grid = Grid::from_rows([[R, R], [G, G]]);
        let date = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
        let text = share_text(&grid, 12, date);
        assert!(text.starts_with("Hue #1\n"));
        assert!(text.contains("Solved in 12 moves"));
        assert!(text.ends_with("🟥🟥\n🟩🟩"));
    }
}
