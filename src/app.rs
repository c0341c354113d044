//! App: a puzzle session wired to its store and the clipboard.
//!
//! The session decides *what* changed; the app decides what to do about it:
//! save after every committed swap or reset, copy share text on request, and
//! show a short status line for clipboard feedback.

use anyhow::Result;
use chrono::NaiveDate;

use crate::config::HueConfig;
use crate::engine::{Session, SessionSnapshot};
use crate::store::{load_for_day, save_or_warn, FileStore, GameStore, MemoryStore, SavedGame};
use crate::types::GameAction;

/// How long a status message stays on screen.
pub const STATUS_MS: u32 = 2000;

/// Somewhere to put share text.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via `arboard`, opened on first use.
///
/// The handle is kept for the life of the app; on X11 the copied text is
/// only available while its owner is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.as_mut() {
            Some(clipboard) => clipboard,
            None => self.inner.insert(arboard::Clipboard::new()?),
        };
        clipboard.set_text(text.to_owned())?;
        Ok(())
    }
}

/// Pick the store for a run.
///
/// Only today's puzzle is saved. Playing another day (`--date`) uses a
/// throwaway store so the save file, which always belongs to `today`, is
/// never read, cleared or overwritten.
pub fn open_store(config: &HueConfig, today: NaiveDate) -> Box<dyn GameStore> {
    if !config.save {
        return Box::new(MemoryStore::new());
    }
    match config.date {
        Some(date) if date != today => {
            tracing::info!(date = %date, "not saving progress for another day's puzzle");
            Box::new(MemoryStore::new())
        }
        _ => Box::new(FileStore::new(config.state_path.clone())),
    }
}

pub struct App {
    session: Session,
    store: Box<dyn GameStore>,
    clipboard: Box<dyn Clipboard>,
    status: Option<String>,
    status_ms: u32,
}

impl App {
    /// Open the puzzle for `date`, resuming today's save if there is one.
    pub fn open(date: NaiveDate, mut store: Box<dyn GameStore>, clipboard: Box<dyn Clipboard>) -> Self {
        let session = match load_for_day(store.as_mut(), date).and_then(|saved| {
            // load_for_day has already validated the grid.
            saved.to_grid().ok().map(|grid| (grid, saved))
        }) {
            Some((grid, saved)) => {
                tracing::info!(date = %date, moves = saved.moves, completed = saved.completed, "resuming saved game");
                Session::restore(date, grid, saved.moves, saved.completed)
            }
            None => {
                tracing::info!(date = %date, "starting new puzzle");
                let mut session = Session::new(date);
                session.start();
                session
            }
        };

        Self {
            session,
            store,
            clipboard,
            status: None,
            status_ms: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Apply one input action. Returns whether anything visible changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let changed = match action {
            GameAction::Share => {
                self.share();
                true
            }
            other => self.session.apply_action(other),
        };
        self.persist();
        changed
    }

    /// Advance timers by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.session.tick(elapsed_ms);
        self.persist();

        if self.status.is_some() {
            self.status_ms = self.status_ms.saturating_sub(elapsed_ms);
            if self.status_ms == 0 {
                self.status = None;
            }
        }
    }

    fn share(&mut self) {
        if !self.session.is_solved() {
            self.set_status("Solve the puzzle first");
            return;
        }

        let text = self.session.share_text();
        match self.clipboard.copy(&text) {
            Ok(()) => self.set_status("Copied to clipboard!"),
            Err(e) => {
                tracing::warn!(error = %e, "failed to copy share text");
                self.set_status("Clipboard unavailable");
            }
        }
    }

    fn set_status(&mut self, msg: &str) {
        self.status = Some(msg.to_string());
        self.status_ms = STATUS_MS;
    }

    fn persist(&mut self) {
        if self.session.take_last_event().is_none() {
            return;
        }
        let game = SavedGame::capture(
            self.session.date(),
            self.session.grid(),
            self.session.moves(),
            self.session.is_solved(),
        );
        save_or_warn(self.store.as_mut(), &game);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;
    use crate::store::{MemoryStore, StoreError};
    use crate::types::{Color, Position, SWAP_ANIMATION_MS};
    use anyhow::anyhow;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl GameStore for SharedStore {
        fn save(&mut self, game: &SavedGame) -> Result<(), StoreError> {
            self.0.borrow_mut().save(game)
        }
        fn load(&self) -> Result<Option<SavedGame>, StoreError> {
            self.0.borrow().load()
        }
        fn clear(&mut self) -> Result<(), StoreError> {
            self.0.borrow_mut().clear()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingClipboard(Rc<RefCell<Vec<String>>>);

    impl Clipboard for RecordingClipboard {
        fn copy(&mut self, text: &str) -> Result<()> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn copy(&mut self, _text: &str) -> Result<()> {
            Err(anyhow!("no display"))
        }
    }

    fn launch_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()
    }

    fn solved_grid() -> Grid {
        use Color::{Blue as B, Green as G, Red as R, Yellow as Y};
        Grid::from_rows([
            [R, R, G, G],
            [R, R, G, G],
            [B, B, Y, Y],
            [B, B, Y, Y],
        ])
    }

    #[test]
    fn committed_swap_is_saved() {
        let store = SharedStore::default();
        let mut app = App::open(
            launch_day(),
            Box::new(store.clone()),
            Box::new(RecordingClipboard::default()),
        );

        app.session.click(Position::new(0, 0));
        app.session.click(Position::new(0, 1));
        app.tick(SWAP_ANIMATION_MS);

        let saved = store.load().unwrap().expect("saved after swap");
        assert_eq!(saved.moves, 1);
        assert_eq!(saved.to_grid().unwrap(), *app.session().grid());
        assert!(!saved.completed);
    }

    #[test]
    fn reopening_resumes_saved_game() {
        let store = SharedStore::default();
        let mut first = App::open(
            launch_day(),
            Box::new(store.clone()),
            Box::new(RecordingClipboard::default()),
        );
        first.session.click(Position::new(1, 0));
        first.session.click(Position::new(2, 0));
        first.tick(SWAP_ANIMATION_MS);

        let second = App::open(
            launch_day(),
            Box::new(store.clone()),
            Box::new(RecordingClipboard::default()),
        );
        assert_eq!(second.session().moves(), 1);
        assert_eq!(second.session().grid(), first.session().grid());
    }

    #[test]
    fn share_requires_solved_puzzle() {
        let clipboard = RecordingClipboard::default();
        let mut app = App::open(
            launch_day(),
            Box::new(SharedStore::default()),
            Box::new(clipboard.clone()),
        );
        app.apply_action(GameAction::Share);
        assert!(clipboard.0.borrow().is_empty());
        assert_eq!(app.status(), Some("Solve the puzzle first"));
    }

    #[test]
    fn share_copies_text_when_solved() {
        let mut store = SharedStore::default();
        store
            .save(&SavedGame::capture(launch_day(), &solved_grid(), 9, true))
            .unwrap();

        let clipboard = RecordingClipboard::default();
        let mut app = App::open(launch_day(), Box::new(store), Box::new(clipboard.clone()));
        assert!(app.session().is_solved());

        app.apply_action(GameAction::Share);
        let copied = clipboard.0.borrow();
        assert_eq!(copied.len(), 1);
        assert!(copied[0].starts_with("Hue #1\n✅ Solved in 9 moves"));
        assert_eq!(app.status(), Some("Copied to clipboard!"));
    }

    #[test]
    fn clipboard_failure_is_reported_not_fatal() {
        let mut store = SharedStore::default();
        store
            .save(&SavedGame::capture(launch_day(), &solved_grid(), 3, true))
            .unwrap();

        let mut app = App::open(launch_day(), Box::new(store), Box::new(BrokenClipboard));
        app.apply_action(GameAction::Share);
        assert_eq!(app.status(), Some("Clipboard unavailable"));
    }

    #[test]
    fn status_expires() {
        let mut app = App::open(
            launch_day(),
            Box::new(SharedStore::default()),
            Box::new(RecordingClipboard::default()),
        );
        app.apply_action(GameAction::Share);
        assert!(app.status().is_some());
        app.tick(STATUS_MS - 1);
        assert!(app.status().is_some());
        app.tick(1);
        assert!(app.status().is_none());
    }
}
