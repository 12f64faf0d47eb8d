//! Schedule file ingestion
//!
//! Turns a day's export into a `RecordBatch`. Which file format the export
//! arrived in is decided here and nowhere else — the pipeline only ever
//! sees records.

pub mod csv;
pub mod excel;

use std::path::Path;

use anyhow::{Result, bail};

use crate::schedule::RecordBatch;

/// Load a schedule export, dispatching on the file extension
pub fn load_batch(path: &Path) -> Result<RecordBatch> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xls" => excel::read_workbook(path),
        "csv" => csv::read_csv(path),
        other => bail!(
            "Unsupported schedule file type '{}' for {} (expected .xlsx, .xls or .csv)",
            other,
            path.display()
        ),
    }
}

/// Header cell with a positional fallback for blank names
pub(crate) fn header_name(raw: &str, index: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        format!("column_{}", index + 1)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert!(load_batch(Path::new("schedule.pdf")).is_err());
        assert!(load_batch(Path::new("schedule")).is_err());
    }

    #[test]
    fn test_header_fallback_names() {
        assert_eq!(header_name("operation", 0), "operation");
        assert_eq!(header_name("  ", 2), "column_3");
    }
}
