use chrono::NaiveDate;

use crate::core::Grid;
use crate::types::Position;

/// Puzzle lifecycle.
///
/// `InProgress -> Solved` happens exactly when a committed swap produces a
/// winning grid. Nothing moves a session out of `Solved` except a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    InProgress,
    Solved,
}

/// A swap whose transition is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapTransition {
    pub from: Position,
    pub to: Position,
    pub elapsed_ms: u32,
}

/// Everything the view needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub date: NaiveDate,
    pub puzzle_number: i64,
    pub grid: Grid,
    pub moves: u32,
    pub phase: Phase,
    pub cursor: Position,
    pub selected: Option<Position>,
    pub transition: Option<SwapTransition>,
    pub overlay_visible: bool,
}

impl SessionSnapshot {
    pub fn solved(&self) -> bool {
        self.phase == Phase::Solved
    }

    /// Accepting clicks: started, unsolved, no swap in flight.
    pub fn playable(&self) -> bool {
        self.phase == Phase::InProgress && self.transition.is_none()
    }
}
