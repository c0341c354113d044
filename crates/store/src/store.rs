//! Game stores.
//!
//! A store holds at most one saved game. Callers that must never fail (the
//! game loop) go through [`load_for_day`], [`save_or_warn`] and
//! [`clear_or_warn`], which log errors and carry on.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::StoreError;
use crate::record::SavedGame;

/// Key-value persistence for the current day's progress.
pub trait GameStore {
    fn save(&mut self, game: &SavedGame) -> Result<(), StoreError>;
    fn load(&self) -> Result<Option<SavedGame>, StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Saved game kept as a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GameStore for FileStore {
    fn save(&mut self, game: &SavedGame) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        // Write-then-rename so a crash mid-write never leaves a torn file.
        let json = serde_json::to_vec(game)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<SavedGame>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

/// In-memory store, used when persistence is disabled and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    game: Option<SavedGame>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn save(&mut self, game: &SavedGame) -> Result<(), StoreError> {
        self.game = Some(game.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<SavedGame>, StoreError> {
        Ok(self.game.clone())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.game = None;
        Ok(())
    }
}

/// Load the saved game for `date`.
///
/// A save from another day is cleared, as is one whose JSON, date or grid
/// cannot be read back. A save that cannot be read for any other reason
/// (permissions, I/O) is left alone and treated as absent. Never fails.
pub fn load_for_day(store: &mut dyn GameStore, date: NaiveDate) -> Option<SavedGame> {
    let saved = match store.load() {
        Ok(Some(saved)) => saved,
        Ok(None) => return None,
        Err(e @ StoreError::Json(_)) => {
            tracing::warn!(error = %e, "discarding unreadable saved game");
            clear_or_warn(store);
            return None;
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load saved game");
            return None;
        }
    };

    let saved_date = match saved.parsed_date() {
        Ok(saved_date) => saved_date,
        Err(e) => {
            tracing::warn!(error = %e, "discarding malformed saved game");
            clear_or_warn(store);
            return None;
        }
    };

    if saved_date != date {
        tracing::info!(saved = %saved.date, "discarding saved game from another day");
        clear_or_warn(store);
        return None;
    }

    if let Err(e) = saved.to_grid() {
        tracing::warn!(error = %e, "discarding malformed saved game");
        clear_or_warn(store);
        return None;
    }

    Some(saved)
}

pub fn save_or_warn(store: &mut dyn GameStore, game: &SavedGame) {
    match store.save(game) {
        Ok(()) => tracing::debug!(date = %game.date, moves = game.moves, "game saved"),
        Err(e) => tracing::warn!(error = %e, "failed to save game"),
    }
}

pub fn clear_or_warn(store: &mut dyn GameStore) {
    if let Err(e) = store.clear() {
        tracing::warn!(error = %e, "failed to clear saved game");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{generate_daily_grid, Grid};
    use crate::types::Color;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn saved_for(date: NaiveDate) -> SavedGame {
        SavedGame::capture(date, &generate_daily_grid(date), 2, false)
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        let game = saved_for(day(13));
        store.save(&game).unwrap();
        assert_eq!(store.load().unwrap(), Some(game));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn load_for_day_returns_matching_save() {
        let mut store = MemoryStore::new();
        let game = saved_for(day(13));
        store.save(&game).unwrap();
        assert_eq!(load_for_day(&mut store, day(13)), Some(game));
    }

    #[test]
    fn load_for_day_clears_stale_save() {
        let mut store = MemoryStore::new();
        store.save(&saved_for(day(13))).unwrap();

        assert_eq!(load_for_day(&mut store, day(14)), None);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn load_for_day_clears_malformed_save() {
        let mut store = MemoryStore::new();
        let grid: Grid = Grid::filled(Color::Red);
        let mut game = SavedGame::capture(day(13), &grid, 0, false);
        game.grid.truncate(1);
        store.save(&game).unwrap();

        assert_eq!(load_for_day(&mut store, day(13)), None);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("state.json"));

        assert_eq!(store.load().unwrap(), None);

        let game = saved_for(day(13));
        store.save(&game).unwrap();
        assert_eq!(store.load().unwrap(), Some(game));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn load_for_day_clears_save_with_bad_date() {
        let mut store = MemoryStore::new();
        let mut game = saved_for(day(13));
        game.date = "13/01/2026".to_string();
        store.save(&game).unwrap();

        assert_eq!(load_for_day(&mut store, day(13)), None);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_corrupt_json_is_cleared() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, b"{not json").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
        assert_eq!(load_for_day(&mut store, day(13)), None);
        assert!(!path.exists());
        assert_eq!(store.load().unwrap(), None);
    }
}
