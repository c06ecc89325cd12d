//! Conversion pipeline: raw rows + start date → [`Timetable`]

use super::dates::date_for_index;
use super::header::find_first_data_row;
use super::mapper::map_row;
use crate::error::{TimetableError, TimetableResult};
use crate::types::{Cell, RawRow, Timetable, TimetableEntry};
use chrono::NaiveDate;
use tracing::debug;

/// Per-conversion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Calendar date of the first data row
    pub start_date: NaiveDate,
    /// Emit single-line JSON instead of one line per date
    pub compact: bool,
}

impl ConvertOptions {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            compact: false,
        }
    }
}

/// Rows that survive header skipping and blank-row filtering
#[derive(Debug, Clone, PartialEq)]
pub struct DataRows<'a> {
    /// Index of the first data row in the sheet
    pub start_index: usize,
    pub rows: Vec<&'a RawRow>,
}

fn is_blank(row: &RawRow) -> bool {
    row.iter().all(Cell::is_empty)
}

/// Skip header rows and drop blank rows
pub fn select_data_rows(rows: &[RawRow]) -> DataRows<'_> {
    let start_index = find_first_data_row(rows);
    let data = rows
        .iter()
        .skip(start_index)
        .filter(|row| !is_blank(row))
        .collect();
    DataRows {
        start_index,
        rows: data,
    }
}

/// Build the timetable for a decoded sheet.
///
/// Each surviving row becomes one day, starting at `start_date` and advancing
/// one calendar day per row. Fails with [`TimetableError::NoData`] when no row
/// is left after header skipping.
pub fn build_timetable(rows: &[RawRow], start_date: NaiveDate) -> TimetableResult<Timetable> {
    let data = select_data_rows(rows);
    debug!(
        start_index = data.start_index,
        data_rows = data.rows.len(),
        "detected timetable data"
    );

    if data.rows.is_empty() {
        return Err(TimetableError::NoData);
    }

    let entries = data.rows.iter().enumerate().try_fold(
        Vec::with_capacity(data.rows.len()),
        |mut acc, (index, row)| {
            acc.push(TimetableEntry {
                date: date_for_index(start_date, index)?,
                record: map_row(row),
            });
            Ok::<_, TimetableError>(acc)
        },
    )?;

    Ok(Timetable::from_entries(entries))
}
