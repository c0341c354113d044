//! Day arithmetic - maps calendar dates to puzzle seeds
//!
//! Every puzzle is keyed by its day number: whole days elapsed since
//! 1970-01-01 in UTC. Time of day never affects the seed.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// `NaiveDate::num_days_from_ce` of 1970-01-01
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Day number of 2026-01-13, the date of puzzle #1
pub const LAUNCH_DAY: i64 = 20_466;

/// Persisted date format (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Day number of a calendar date.
pub fn day_number(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 - EPOCH_DAYS_FROM_CE
}

/// Day number of an instant: `floor(epoch_millis / MS_PER_DAY)`.
pub fn day_number_at(instant: DateTime<Utc>) -> i64 {
    instant.timestamp_millis().div_euclid(MS_PER_DAY)
}

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format a date as `YYYY-MM-DD`.
pub fn date_string(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Puzzle number shown in share text; the launch day is #1.
pub fn puzzle_number(date: NaiveDate) -> i64 {
    day_number(date) - LAUNCH_DAY + 1
}
