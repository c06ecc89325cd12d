//! Timetable API Server module
//!
//! HTTP front end for uploads: the spreadsheet bytes arrive as the request
//! body and the converted timetable comes back as JSON.
//! Run with `timetable-server`.

pub mod handlers;
pub mod server;

pub use server::{build_router, run_api_server};
