use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use csv::{Terminator, WriterBuilder};

use crate::audit::{AuditError, ClassifiedRepository};

/// Column headers of the processed report.
pub const CSV_HEADER: [&str; 7] = [
    "Repo URL",
    "Primary language",
    "All languages",
    "Last commit",
    "PushedAt",
    "Total pull requests",
    "Calculated status",
];

const DELIMITER: u8 = b';';

/// `2024-11-30 08:30:00 +0000 UTC`; sub-second digits only when present.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z %Z";

fn timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

fn row(repo: &ClassifiedRepository<'_>) -> [String; 7] {
    let record = repo.record;
    let all_languages: String = record
        .languages
        .iter()
        .map(|name| format!("{name}\n"))
        .collect();

    [
        record.url.clone(),
        record.primary_language.clone(),
        all_languages,
        timestamp(repo.last_activity),
        timestamp(record.pushed_at),
        record.pull_request_count.to_string(),
        repo.status.label().to_string(),
    ]
}

/// Write the processed report as `;`-delimited CSV with a header row.
pub fn write_csv<W: io::Write>(
    writer: W,
    repos: &[ClassifiedRepository<'_>],
) -> Result<(), AuditError> {
    let mut out = WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    out.write_record(CSV_HEADER)?;
    for repo in repos {
        out.write_record(row(repo))?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render the processed report into memory.
pub fn render_csv(repos: &[ClassifiedRepository<'_>]) -> Result<Vec<u8>, AuditError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, repos)?;
    Ok(buffer)
}

/// Render the processed report and write it to `path`.
///
/// The file is only created once rendering succeeded.
pub fn write_csv_file(path: &Path, repos: &[ClassifiedRepository<'_>]) -> Result<(), AuditError> {
    let rendered = render_csv(repos)?;
    fs::write(path, rendered).map_err(|e| AuditError::io("write report", path, e))?;
    tracing::info!(path = %path.display(), rows = repos.len(), "Wrote CSV report");
    Ok(())
}
