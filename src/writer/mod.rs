//! JSON output for converted timetables

use crate::error::TimetableResult;
use crate::types::{date_key, Timetable};
use std::fs;
use std::path::Path;

/// Default file name for a written timetable
pub const DEFAULT_OUTPUT_NAME: &str = "timetable.json";

/// One line per date, each day record in compact form:
///
/// ```text
/// {
///   "2024-06-01": {"fajr":{"start":"05:00","jamat":"05:20"},...},
///   "2024-06-02": {...}
/// }
/// ```
pub fn to_pretty_json(timetable: &Timetable) -> TimetableResult<String> {
    let lines = timetable
        .iter()
        .map(|entry| -> TimetableResult<String> {
            Ok(format!(
                "  {}: {}",
                serde_json::to_string(&date_key(entry.date))?,
                serde_json::to_string(&entry.record)?
            ))
        })
        .collect::<TimetableResult<Vec<String>>>()?;

    Ok(format!("{{\n{}\n}}", lines.join(",\n")))
}

/// Single-line JSON object keyed by date
pub fn to_compact_json(timetable: &Timetable) -> TimetableResult<String> {
    Ok(serde_json::to_string(timetable)?)
}

pub fn render(timetable: &Timetable, compact: bool) -> TimetableResult<String> {
    if compact {
        to_compact_json(timetable)
    } else {
        to_pretty_json(timetable)
    }
}

/// Write the rendered timetable to `path`
pub fn write_timetable(path: &Path, timetable: &Timetable, compact: bool) -> TimetableResult<()> {
    let json = render(timetable, compact)?;
    fs::write(path, json)?;
    Ok(())
}
