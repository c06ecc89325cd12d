//! Prayer Timetable - spreadsheet timetables to date-indexed 24-hour JSON
//!
//! Mosque timetables are usually kept as spreadsheets: a few title and label
//! rows, then one row per day with ten time columns (fajr start/jamat,
//! sunrise, dhuhr start/jamat, asr start/jamat, maghrib, isha start/jamat).
//! Times are stored as spreadsheet fractions, `H:MM`, `H:MM AM/PM`, or dotted
//! variants, and the AM/PM part is often left out because the prayer implies
//! it. This crate finds the data rows, normalizes every time to `HH:MM`, and
//! assigns consecutive calendar dates from a chosen start date.
//!
//! # Example
//!
//! ```no_run
//! use prayer_timetable::core::parse_start_date;
//! use prayer_timetable::writer::to_pretty_json;
//! use std::path::Path;
//!
//! let start = parse_start_date("2024-03-11")?;
//! let timetable = prayer_timetable::timetable_from_path(Path::new("ramadan.xlsx"), start)?;
//!
//! println!("{}", to_pretty_json(&timetable)?);
//! # Ok::<(), prayer_timetable::error::TimetableError>(())
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

use chrono::NaiveDate;
use std::path::Path;

// Re-export commonly used types
pub use error::{TimetableError, TimetableResult};
pub use types::{Cell, DayRecord, PrayerKey, RawRow, TimeOfDay, Timetable};

/// Decode spreadsheet bytes and build the timetable
pub fn timetable_from_bytes(bytes: Vec<u8>, start_date: NaiveDate) -> TimetableResult<Timetable> {
    let rows = excel::rows_from_bytes(bytes)?;
    core::build_timetable(&rows, start_date)
}

/// Read a spreadsheet file and build the timetable
pub fn timetable_from_path(path: &Path, start_date: NaiveDate) -> TimetableResult<Timetable> {
    let rows = excel::SheetImporter::new(path).import()?;
    core::build_timetable(&rows, start_date)
}
