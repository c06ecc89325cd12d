//! Timetable interpretation pipeline
//!
//! Leaf-first: [`classifier`] and [`normalizer`] work on single cells,
//! [`header`] and [`mapper`] on rows, [`dates`] on row indices, and
//! [`converter`] ties them into one pass over a decoded sheet.

pub mod classifier;
pub mod converter;
pub mod dates;
pub mod header;
pub mod mapper;
pub mod normalizer;

pub use classifier::looks_like_time;
pub use converter::{build_timetable, select_data_rows, ConvertOptions, DataRows};
pub use dates::{date_for_index, parse_start_date};
pub use header::find_first_data_row;
pub use mapper::map_row;
pub use normalizer::{afternoon_hour, enforce_afternoon, normalize};
