//! Spreadsheet importer - first worksheet → positional raw rows

use crate::error::{TimetableError, TimetableResult};
use crate::types::{Cell, RawRow};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File extensions calamine can decode
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Reject paths that are not spreadsheets before reading them
pub fn check_extension(path: &Path) -> TimetableResult<()> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(TimetableError::UnsupportedFile(path.display().to_string()))
    }
}

/// Importer for the first worksheet of a spreadsheet file
pub struct SheetImporter {
    path: PathBuf,
}

impl SheetImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate the file type, read the whole file and decode its first sheet
    pub fn import(&self) -> TimetableResult<Vec<RawRow>> {
        check_extension(&self.path)?;
        let bytes = fs::read(&self.path)?;
        info!(path = %self.path.display(), bytes = bytes.len(), "read spreadsheet");
        rows_from_bytes(bytes)
    }
}

/// Decode spreadsheet bytes (format sniffed by calamine) into raw rows
pub fn rows_from_bytes(bytes: Vec<u8>) -> TimetableResult<Vec<RawRow>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| TimetableError::Decode(e.to_string()))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| TimetableError::Decode(e.to_string()))?,
        None => return Err(TimetableError::Decode("workbook has no worksheets".to_string())),
    };

    let rows = range_to_rows(&range);
    debug!(rows = rows.len(), "decoded first worksheet");
    Ok(rows)
}

/// Convert a calamine range into positional rows.
///
/// Positions count from the first used cell, not from A1: a sheet whose
/// times start in column B reads column B as the fajr start. Trailing empty
/// cells are dropped; a blank row becomes an empty vector.
pub fn range_to_rows(range: &Range<Data>) -> Vec<RawRow> {
    range
        .rows()
        .map(|cells| {
            let mut row: RawRow = cells.iter().map(convert_cell).collect();
            while row.last().is_some_and(Cell::is_empty) {
                row.pop();
            }
            row
        })
        .collect()
}

/// Map one calamine value onto a raw cell
pub fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        // Time-formatted cells keep their serial value
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_extension() {
        assert!(check_extension(Path::new("ramadan.xlsx")).is_ok());
        assert!(check_extension(Path::new("OLD.XLS")).is_ok());
        assert!(check_extension(Path::new("sheet.ods")).is_ok());
        assert!(matches!(
            check_extension(Path::new("times.csv")),
            Err(TimetableError::UnsupportedFile(_))
        ));
        assert!(check_extension(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Empty), Cell::Empty);
        assert_eq!(convert_cell(&Data::Float(0.25)), Cell::Number(0.25));
        assert_eq!(convert_cell(&Data::Int(3)), Cell::Number(3.0));
        assert_eq!(
            convert_cell(&Data::String("5:30".to_string())),
            Cell::from("5:30")
        );
        assert_eq!(convert_cell(&Data::Bool(true)), Cell::from("true"));
    }

    #[test]
    fn test_range_to_rows_starts_at_first_used_cell() {
        let mut range = Range::new((1, 1), (2, 3));
        range.set_value((1, 1), Data::String("Fajr".to_string()));
        range.set_value((2, 1), Data::Float(0.25));
        range.set_value((2, 2), Data::String("6:15".to_string()));

        let rows = range_to_rows(&range);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![Cell::from("Fajr")]);
        assert_eq!(rows[1], vec![Cell::Number(0.25), Cell::from("6:15")]);
    }

    #[test]
    fn test_data_in_column_b_fills_fajr_start() {
        let times = [
            "5:30", "5:50", "6:30", "1:00", "1:30", "4:30", "5:00", "8:00", "9:30", "9:45",
        ];
        let mut range = Range::new((0, 1), (0, 10));
        for (offset, time) in times.iter().enumerate() {
            range.set_value((0, 1 + offset as u32), Data::String(time.to_string()));
        }

        let rows = range_to_rows(&range);
        let start = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let timetable = crate::core::build_timetable(&rows, start).unwrap();
        let day = timetable.get(start).unwrap();
        assert_eq!(day.fajr.start.as_str(), "05:30");
        assert_eq!(day.fajr.jamat.as_str(), "05:50");
        assert_eq!(day.sunrise.start.as_str(), "06:30");
        assert_eq!(day.isha.start.as_str(), "21:30");
        assert_eq!(day.isha.jamat.as_str(), "21:45");
    }

    #[test]
    fn test_range_to_rows_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(range_to_rows(&range).is_empty());
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let result = rows_from_bytes(b"definitely not a spreadsheet".to_vec());
        assert!(matches!(result, Err(TimetableError::Decode(_))));
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let importer = SheetImporter::new("/nonexistent/timetable.xlsx");
        assert!(matches!(importer.import(), Err(TimetableError::Io(_))));
    }

    #[test]
    fn test_import_rejects_wrong_type() {
        let importer = SheetImporter::new("timetable.pdf");
        assert!(matches!(
            importer.import(),
            Err(TimetableError::UnsupportedFile(_))
        ));
    }
}
