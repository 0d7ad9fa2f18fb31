//! Report output: the processed CSV report or the raw JSON dump.

mod csv_report;
mod raw_json;

use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::audit::{AuditError, classify_all};
use crate::platform::RepositoryRecord;

pub use csv_report::{CSV_HEADER, render_csv, write_csv, write_csv_file};
pub use raw_json::write_json;

/// Where and how the audit result is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Dump the raw records as JSON, skipping classification.
    RawJson,
    /// Classify the records and write the CSV report to a file.
    Csv(PathBuf),
}

/// Emit the audit result.
///
/// Raw JSON goes to `stdout`. The CSV report is classified against `now`
/// and written to its file path; `stdout` is left untouched.
pub fn write_report<W: io::Write>(
    mode: &OutputMode,
    records: &[RepositoryRecord],
    now: DateTime<Utc>,
    stdout: W,
) -> Result<(), AuditError> {
    match mode {
        OutputMode::RawJson => write_json(stdout, records),
        OutputMode::Csv(path) => {
            let classified = classify_all(records, now);
            write_csv_file(path, &classified)
        }
    }
}
