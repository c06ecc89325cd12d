//! Spreadsheet decoding
//!
//! Reads the first worksheet of .xlsx/.xlsm/.xlsb/.xls/.ods files via
//! calamine and hands positional rows to the conversion core.

mod importer;

pub use importer::{
    check_extension, convert_cell, range_to_rows, rows_from_bytes, SheetImporter,
    SUPPORTED_EXTENSIONS,
};
