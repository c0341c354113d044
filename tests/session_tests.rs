//! Session state machine driven through actions and ticks.

use chrono::NaiveDate;
use tui_hue::core::{generate_daily_grid, Grid};
use tui_hue::engine::{Phase, Session, SessionEvent};
use tui_hue::types::{Color, GameAction, Position, SWAP_ANIMATION_MS, TICK_MS};

use Color::{Blue as B, Green as G, Red as R, Yellow as Y};

fn launch_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()
}

fn nearly_solved() -> Grid {
    Grid::from_rows([
        [R, R, G, G],
        [R, R, G, G],
        [B, B, Y, Y],
        [B, Y, B, Y],
    ])
}

/// Run ticks at the loop rate until the transition completes.
fn settle(session: &mut Session) {
    for _ in 0..(SWAP_ANIMATION_MS / TICK_MS + 1) {
        session.tick(TICK_MS);
    }
}

#[test]
fn test_keyboard_swap_commits_after_transition() {
    let mut session = Session::new(launch_day());
    assert_eq!(session.phase(), Phase::NotStarted);
    session.start();
    assert_eq!(session.phase(), Phase::InProgress);

    let original = *session.grid();
    assert!(session.apply_action(GameAction::Select));
    assert!(session.apply_action(GameAction::CursorRight));
    assert!(session.apply_action(GameAction::Select));

    assert_eq!(session.moves(), 1);
    assert!(session.transition().is_some());
    assert_eq!(*session.grid(), original, "grid changes only when the swap commits");

    // Input is locked while the swap is in flight.
    assert!(!session.apply_action(GameAction::Select));

    settle(&mut session);
    assert!(session.transition().is_none());
    assert_eq!(session.grid()[Position::new(0, 0)], original[Position::new(0, 1)]);
    assert_eq!(session.grid()[Position::new(0, 1)], original[Position::new(0, 0)]);
    assert_eq!(
        session.take_last_event(),
        Some(SessionEvent::SwapCommitted { solved: false })
    );
}

#[test]
fn test_winning_swap_solves_and_locks() {
    let mut session = Session::restore(launch_day(), nearly_solved(), 4, false);
    assert_eq!(session.phase(), Phase::InProgress);

    session.click(Position::new(3, 1));
    session.click(Position::new(3, 2));
    settle(&mut session);

    assert!(session.is_solved());
    assert_eq!(session.moves(), 5);
    assert!(session.overlay_visible());

    // Dismissing hides the overlay but the puzzle stays solved.
    assert!(session.apply_action(GameAction::Dismiss));
    assert!(!session.overlay_visible());
    assert!(session.is_solved());
    assert!(!session.apply_action(GameAction::Select));
}

#[test]
fn test_reset_restores_generated_grid() {
    let mut session = Session::restore(launch_day(), nearly_solved(), 7, false);
    session.reset();

    assert_eq!(*session.grid(), generate_daily_grid(launch_day()));
    assert_eq!(session.moves(), 0);
    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(session.selected(), None);
    assert_eq!(session.take_last_event(), Some(SessionEvent::Reset));
}

#[test]
fn test_share_text_after_win() {
    let mut session = Session::restore(launch_day(), nearly_solved(), 0, false);
    session.click(Position::new(3, 1));
    session.click(Position::new(3, 2));
    settle(&mut session);

    let text = session.share_text();
    assert_eq!(
        text,
        "Hue #1\n✅ Solved in 1 moves\n\n🟥🟥🟩🟩\n🟥🟥🟩🟩\n🟦🟦🟨🟨\n🟦🟦🟨🟨"
    );
}
