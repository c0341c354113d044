//! PuzzleView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::{SessionSnapshot, SwapTransition};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Position, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PAGE: Rgb = Rgb::new(255, 255, 255);
const INK: Rgb = Rgb::new(15, 23, 42);
const MUTED: Rgb = Rgb::new(100, 116, 139);
const FRAME: Rgb = Rgb::new(203, 213, 225);

const TITLE: &str = "hue";
const SUBTITLE: &str = "Connect all tiles of the same color";
const HELP: &str = "arrows move · space select · r reset · q quit";
const HELP_SOLVED: &str = "solved! c copy result · r reset · q quit";

/// Rows above the board frame: title, subtitle, moves, blank.
const HEADER_ROWS: u16 = 4;
/// Rows below the board frame: blank, help, status.
const FOOTER_ROWS: u16 = 3;

/// Screen placement of the header and board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top row of the header.
    pub top: u16,
    /// Top-left corner of the board frame.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// Terminal renderer for the daily puzzle.
pub struct PuzzleView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for PuzzleView {
    fn default() -> Self {
        // 2:1 width keeps tiles roughly square in most terminal fonts.
        Self {
            tile_w: 6,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl PuzzleView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = GRID_SIZE as u16 * self.tile_w + 2;
        let frame_h = GRID_SIZE as u16 * self.tile_h + 2;
        let content_h = HEADER_ROWS + frame_h + FOOTER_ROWS;

        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            top,
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: top + HEADER_ROWS,
            frame_w,
            frame_h,
        }
    }

    /// Top-left terminal cell of a tile.
    pub fn tile_origin(&self, layout: &Layout, pos: Position) -> (u16, u16) {
        (
            layout.frame_x + 1 + pos.col as u16 * self.tile_w,
            layout.frame_y + 1 + pos.row as u16 * self.tile_h,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `status` is a one-line message under the help text (e.g. clipboard
    /// feedback).
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(INK, PAGE).into_cell(' '));

        let layout = self.layout(viewport);
        self.draw_header(fb, snap, viewport, &layout);
        self.draw_border(fb, &layout, CellStyle::new(FRAME, PAGE));

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                self.draw_tile(fb, snap, &layout, Position::new(row, col));
            }
        }

        let help = if snap.solved() { HELP_SOLVED } else { HELP };
        let footer_y = layout.frame_y + layout.frame_h + 1;
        fb.put_str_centered(0, footer_y, viewport.width, help, CellStyle::new(MUTED, PAGE));
        if let Some(status) = status {
            fb.put_str_centered(0, footer_y + 1, viewport.width, status, CellStyle::new(INK, PAGE));
        }

        if snap.overlay_visible {
            self.draw_win_overlay(fb, snap, &layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, status: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, viewport: Viewport, layout: &Layout) {
        let w = viewport.width;
        fb.put_str_centered(0, layout.top, w, TITLE, CellStyle::new(INK, PAGE).bold());
        fb.put_str_centered(0, layout.top + 1, w, SUBTITLE, CellStyle::new(MUTED, PAGE));
        let moves = format!("#{}  Moves: {}", snap.puzzle_number, snap.moves);
        fb.put_str_centered(0, layout.top + 2, w, &moves, CellStyle::new(INK, PAGE));
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout, style: CellStyle) {
        let Layout {
            frame_x: x,
            frame_y: y,
            frame_w: w,
            frame_h: h,
            ..
        } = *layout;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, layout: &Layout, pos: Position) {
        let (x, y) = self.tile_origin(layout, pos);
        let color = Rgb::from(snap.grid[pos]);

        if in_flight(snap.transition, pos) {
            // Tiles mid-swap are drawn hollow until the swap commits.
            fb.fill_rect(x, y, self.tile_w, self.tile_h, '▒', CellStyle::new(color, PAGE));
            return;
        }

        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', CellStyle::new(INK, color));

        if snap.selected == Some(pos) && self.tile_w >= 2 && self.tile_h >= 2 {
            let mark = CellStyle::new(INK, color).bold();
            let (r, b) = (x + self.tile_w - 1, y + self.tile_h - 1);
            fb.put_char(x, y, '┏', mark);
            fb.put_char(r, y, '┓', mark);
            fb.put_char(x, b, '┗', mark);
            fb.put_char(r, b, '┛', mark);
        }

        if snap.cursor == pos && !snap.solved() {
            fb.put_char(
                x + self.tile_w / 2,
                y + self.tile_h / 2,
                '●',
                CellStyle::new(INK, color).bold(),
            );
        }
    }

    fn draw_win_overlay(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, layout: &Layout) {
        let w = layout.frame_w;
        let h = 7u16.min(layout.frame_h);
        let x = layout.frame_x;
        let y = layout.frame_y + layout.frame_h.saturating_sub(h) / 2;

        let body = CellStyle::new(INK, PAGE);
        fb.fill_rect(x, y, w, h, ' ', body);
        self.draw_border(
            fb,
            &Layout {
                top: layout.top,
                frame_x: x,
                frame_y: y,
                frame_w: w,
                frame_h: h,
            },
            CellStyle::new(INK, PAGE),
        );

        let solved = format!("Solved in {} moves", snap.moves);
        fb.put_str_centered(x, y + 1, w, "Complete!", body.bold());
        fb.put_str_centered(x, y + 3, w, &solved, body);
        fb.put_str_centered(x, y + 5, w, "c copy · esc close", CellStyle::new(MUTED, PAGE));
    }
}

fn in_flight(transition: Option<SwapTransition>, pos: Position) -> bool {
    transition.is_some_and(|t| t.from == pos || t.to == pos)
}
