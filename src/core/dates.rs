//! Date sequencing: row index → calendar date

use crate::error::{TimetableError, TimetableResult};
use chrono::{Days, NaiveDate};

/// Calendar date for the `index`-th data row (index 0 is the start date).
///
/// Pure calendar arithmetic, no timezone is involved.
pub fn date_for_index(start: NaiveDate, index: usize) -> TimetableResult<NaiveDate> {
    let overflow = || {
        TimetableError::DateOverflow(format!("{} + {} days", start.format("%Y-%m-%d"), index))
    };
    let days = u64::try_from(index).map_err(|_| overflow())?;
    start.checked_add_days(Days::new(days)).ok_or_else(overflow)
}

/// Parse a user supplied "YYYY-MM-DD" start date
pub fn parse_start_date(text: &str) -> TimetableResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| TimetableError::InvalidDate(text.to_string()))
}
