use std::io;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::audit::AuditError;
use crate::platform::RepositoryRecord;

/// Write the raw records as tab-indented JSON followed by a newline.
pub fn write_json<W: io::Write>(
    mut writer: W,
    records: &[RepositoryRecord],
) -> Result<(), AuditError> {
    {
        let formatter = PrettyFormatter::with_indent(b"\t");
        let mut serializer = Serializer::with_formatter(&mut writer, formatter);
        records.serialize(&mut serializer)?;
    }
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| AuditError::Io {
            context: "Failed to write JSON output".to_string(),
            source: e,
        })
}
