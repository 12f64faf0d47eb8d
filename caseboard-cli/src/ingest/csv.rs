//! Read a schedule batch from a CSV export

use std::path::Path;

use anyhow::{Context, Result};

use crate::schedule::{CellValue, RecordBatch};

use super::header_name;

/// Read a CSV file (header row required) into a batch
///
/// CSV carries no cell types; blank fields become `Null` and everything
/// else stays a string — the time parser copes with numeric strings.
pub fn read_csv(path: &Path) -> Result<RecordBatch> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header row: {}", path.display()))?
        .iter()
        .enumerate()
        .map(|(i, h)| header_name(h, i))
        .collect();

    let mut batch = RecordBatch::new(headers);
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to read CSV row: {}", path.display()))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        batch.push_row(record.iter().map(field_value).collect());
    }

    log::debug!("Read {} rows from {}", batch.len(), path.display());
    Ok(batch)
}

fn field_value(field: &str) -> CellValue {
    if field.trim().is_empty() {
        CellValue::Null
    } else {
        CellValue::String(field.to_string())
    }
}
