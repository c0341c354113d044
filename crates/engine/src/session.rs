//! Session module - one player's run at one day's puzzle
//!
//! The core is stateless; this is the state the surrounding game keeps
//! between inputs: the current grid snapshot, selection, cursor, move count,
//! and the in-flight swap transition. Grids are replaced, never mutated.

use chrono::NaiveDate;

use crate::core::{check_win, generate_daily_grid, is_adjacent, puzzle_number, swap_tiles, Grid};
use crate::share::share_text;
use crate::snapshot::{Phase, SessionSnapshot, SwapTransition};
use crate::types::{GameAction, Position, GRID_SIZE, SWAP_ANIMATION_MS};

/// Result of clicking a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Solved, not started, mid-transition, or off the grid.
    Ignored,
    Selected(Position),
    Deselected,
    SwapStarted { from: Position, to: Position },
}

/// State changes the caller may want to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SwapCommitted { solved: bool },
    Reset,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    date: NaiveDate,
    /// The day's generated grid, kept for reset.
    original: Grid,
    grid: Grid,
    phase: Phase,
    moves: u32,
    cursor: Position,
    selected: Option<Position>,
    transition: Option<SwapTransition>,
    overlay_dismissed: bool,
    /// Last persistable change (consumed by the caller).
    last_event: Option<SessionEvent>,
}

impl Session {
    /// Create a session for the given day's puzzle
    pub fn new(date: NaiveDate) -> Self {
        let original = generate_daily_grid(date);
        Self {
            date,
            original,
            grid: original,
            phase: Phase::NotStarted,
            moves: 0,
            cursor: Position::new(0, 0),
            selected: None,
            transition: None,
            overlay_dismissed: false,
            last_event: None,
        }
    }

    /// Resume a saved run of the given day's puzzle.
    ///
    /// The session is started; it is `Solved` if the save says so or the saved
    /// grid already wins.
    pub fn restore(date: NaiveDate, grid: Grid, moves: u32, completed: bool) -> Self {
        let mut session = Self::new(date);
        session.grid = grid;
        session.moves = moves;
        session.phase = if completed || check_win(&grid) {
            Phase::Solved
        } else {
            Phase::InProgress
        };
        session
    }

    /// Start the puzzle.
    ///
    /// A generated grid can already be solved; such a session goes straight
    /// to `Solved`.
    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            return;
        }
        self.phase = Self::phase_for(&self.grid);
    }

    fn phase_for(grid: &Grid) -> Phase {
        if check_win(grid) {
            Phase::Solved
        } else {
            Phase::InProgress
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn original(&self) -> &Grid {
        &self.original
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_solved(&self) -> bool {
        self.phase == Phase::Solved
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn transition(&self) -> Option<SwapTransition> {
        self.transition
    }

    /// Whether the win overlay should be drawn
    pub fn overlay_visible(&self) -> bool {
        self.is_solved() && !self.overlay_dismissed
    }

    /// Take the last persistable change, if any.
    pub fn take_last_event(&mut self) -> Option<SessionEvent> {
        self.last_event.take()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            date: self.date,
            puzzle_number: puzzle_number(self.date),
            grid: self.grid,
            moves: self.moves,
            phase: self.phase,
            cursor: self.cursor,
            selected: self.selected,
            transition: self.transition,
            overlay_visible: self.overlay_visible(),
        }
    }

    /// Share text for the current grid and move count
    pub fn share_text(&self) -> String {
        share_text(&self.grid, self.moves, self.date)
    }

    /// Click a tile.
    ///
    /// Clicking the selected tile deselects it, a non-adjacent tile moves the
    /// selection, and an adjacent tile starts a swap. The move is counted when
    /// the swap starts; the grid changes when the transition completes.
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        if self.phase != Phase::InProgress || self.transition.is_some() || !self.grid.contains(pos)
        {
            return ClickOutcome::Ignored;
        }

        match self.selected {
            Some(selected) if selected == pos => {
                self.selected = None;
                ClickOutcome::Deselected
            }
            Some(selected) if is_adjacent(selected, pos) => {
                self.transition = Some(SwapTransition {
                    from: selected,
                    to: pos,
                    elapsed_ms: 0,
                });
                self.moves = self.moves.saturating_add(1);
                self.selected = None;
                ClickOutcome::SwapStarted {
                    from: selected,
                    to: pos,
                }
            }
            _ => {
                self.selected = Some(pos);
                ClickOutcome::Selected(pos)
            }
        }
    }

    /// Advance the swap transition.
    ///
    /// Returns true when a swap was committed this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(mut transition) = self.transition else {
            return false;
        };

        transition.elapsed_ms = transition.elapsed_ms.saturating_add(elapsed_ms);
        if transition.elapsed_ms < SWAP_ANIMATION_MS {
            self.transition = Some(transition);
            return false;
        }

        self.transition = None;
        self.grid = swap_tiles(&self.grid, transition.from, transition.to);

        let solved = check_win(&self.grid);
        if solved {
            self.phase = Phase::Solved;
            tracing::info!(date = %self.date, moves = self.moves, "puzzle solved");
        }
        self.last_event = Some(SessionEvent::SwapCommitted { solved });
        true
    }

    /// Restore the day's original grid and zero the move counter.
    pub fn reset(&mut self) {
        self.grid = self.original;
        self.moves = 0;
        self.phase = Self::phase_for(&self.grid);
        self.selected = None;
        self.transition = None;
        self.overlay_dismissed = false;
        self.last_event = Some(SessionEvent::Reset);
    }

    /// Apply a game action
    ///
    /// Returns whether the action changed the session. `Share` is left to the
    /// caller and always returns false here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::CursorUp => self.move_cursor(-1, 0),
            GameAction::CursorDown => self.move_cursor(1, 0),
            GameAction::CursorLeft => self.move_cursor(0, -1),
            GameAction::CursorRight => self.move_cursor(0, 1),
            GameAction::Select => self.click(self.cursor) != ClickOutcome::Ignored,
            GameAction::Reset => {
                self.reset();
                true
            }
            GameAction::Dismiss => {
                if self.overlay_visible() {
                    self.overlay_dismissed = true;
                    true
                } else {
                    self.selected.take().is_some()
                }
            }
            GameAction::Share => false,
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) -> bool {
        let max = GRID_SIZE - 1;
        let row = self.cursor.row.saturating_add_signed(d_row).min(max);
        let col = self.cursor.col.saturating_add_signed(d_col).min(max);
        let next = Position::new(row, col);
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }
}
