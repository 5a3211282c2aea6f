//! Report formatting for tanktrack.
//!
//! Renders the tank table as CSV or as a printable HTML page, both in
//! store listing order with the same column set: fixed columns first,
//! then one column per catalog phase.

#![warn(missing_docs)]

mod csv;
mod html;

pub use csv::{csv_header, csv_report};
pub use html::html_report;

use std::path::Path;

/// Write a rendered report to disk - the file-download analog.
pub fn write_report(path: impl AsRef<Path>, contents: &str) -> std::io::Result<()> {
    std::fs::write(path, contents)
}
