use std::fs;
use std::path::Path;

use super::error::AuditError;

/// Parse a newline-delimited organization list.
///
/// Surrounding whitespace is trimmed; blank lines and `#` comments are
/// skipped. Order is preserved and duplicates are kept.
pub fn parse_organizations(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Read and parse the organization list file.
pub fn read_organizations(path: &Path) -> Result<Vec<String>, AuditError> {
    let content = fs::read_to_string(path)
        .map_err(|e| AuditError::io("read organization list", path, e))?;
    let organizations = parse_organizations(&content);
    tracing::debug!(path = %path.display(), count = organizations.len(), "Loaded organization list");
    Ok(organizations)
}
