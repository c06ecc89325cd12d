//! Time-cell classification used to tell data rows from header rows

use crate::types::Cell;
use once_cell::sync::Lazy;
use regex::Regex;

static TIME_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\d{1,2}:\d{2}(\s*(AM|PM))?$").expect("valid time pattern"));

/// Returns true if the cell plausibly holds a time of day.
///
/// Numeric cells always count (spreadsheet fractional-day times). Text counts
/// only in the strict `H:MM` / `H:MM AM|PM` shape, so header labels, dates and
/// dotted variants like "5.30" do not.
pub fn looks_like_time(cell: &Cell) -> bool {
    match cell {
        Cell::Empty => false,
        Cell::Number(_) => true,
        Cell::Text(s) => TIME_LIKE.is_match(s.trim()),
    }
}

/// Number of time-like cells in a row
pub fn count_time_like(row: &[Cell]) -> usize {
    row.iter().filter(|cell| looks_like_time(cell)).count()
}
