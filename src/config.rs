//! Runtime configuration from environment variables and CLI flags.
//!
//! - `HUE_STATE_PATH`: saved game file (default: `<data dir>/tui-hue/state.json`)
//! - `HUE_LOG_PATH`: log file (default: `<data dir>/tui-hue/tui-hue.log`)
//! - `HUE_NO_SAVE`: set to "1" or "true" to disable saving
//!
//! Flags: `--date YYYY-MM-DD`, `--print`, `--no-save`.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::core::{parse_date, today};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HueConfig {
    pub state_path: PathBuf,
    pub log_path: PathBuf,
    pub save: bool,
    /// Puzzle day; `None` means today (UTC).
    pub date: Option<NaiveDate>,
    /// Print the day's grid and exit instead of starting the TUI.
    pub print: bool,
}

impl Default for HueConfig {
    fn default() -> Self {
        let dir = data_dir();
        Self {
            state_path: dir.join("state.json"),
            log_path: dir.join("tui-hue.log"),
            save: true,
            date: None,
            print: false,
        }
    }
}

impl HueConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        let non_empty = |key: &str| {
            var(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(path) = non_empty("HUE_STATE_PATH") {
            config.state_path = PathBuf::from(path);
        }
        if let Some(path) = non_empty("HUE_LOG_PATH") {
            config.log_path = PathBuf::from(path);
        }
        if let Some(v) = non_empty("HUE_NO_SAVE") {
            config.save = !(v == "1" || v.eq_ignore_ascii_case("true"));
        }

        config
    }

    /// Apply command-line flags (program name already stripped).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--date" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --date"))?;
                    let date =
                        parse_date(v).ok_or_else(|| anyhow!("invalid --date value: {} (expected YYYY-MM-DD)", v))?;
                    self.date = Some(date);
                }
                "--print" => self.print = true,
                "--no-save" => self.save = false,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(())
    }

    pub fn puzzle_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(today)
    }
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tui-hue")
}
