//! Header detection: where does the real data start?

use super::classifier::count_time_like;
use crate::types::RawRow;

/// Minimum number of time-like cells for a row to count as data
pub const MIN_TIME_CELLS: usize = 3;

/// Start index used when no row qualifies (assume a single header row)
pub const FALLBACK_START: usize = 1;

/// Index of the first row holding at least [`MIN_TIME_CELLS`] time-like cells.
///
/// Title rows, column-label rows and blank rows in front of the data are
/// skipped without assuming a fixed header height. Falls back to
/// [`FALLBACK_START`] when nothing looks like data.
pub fn find_first_data_row(rows: &[RawRow]) -> usize {
    rows.iter()
        .position(|row| count_time_like(row) >= MIN_TIME_CELLS)
        .unwrap_or(FALLBACK_START)
}
