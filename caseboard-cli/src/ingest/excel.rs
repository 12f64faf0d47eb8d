//! Read a schedule batch from an Excel workbook

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Reader, open_workbook_auto};

use crate::schedule::{CellValue, RecordBatch};

use super::header_name;

/// Read the first sheet of an .xlsx/.xls workbook into a batch
///
/// The first row is the header row; rows that are entirely blank are
/// skipped, everything else is kept in file order.
pub fn read_workbook(path: &Path) -> Result<RecordBatch> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .context("Excel file has no sheets")?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .enumerate()
            .map(|(i, cell)| header_name(&cell.to_string(), i))
            .collect(),
        None => Vec::new(),
    };

    let mut batch = RecordBatch::new(headers);
    for row in rows {
        // Skip fully empty rows
        if row.iter().all(|c| c.to_string().trim().is_empty()) {
            continue;
        }
        batch.push_row(row.iter().map(cell_value).collect());
    }

    log::debug!(
        "Read {} rows from sheet '{}' of {}",
        batch.len(),
        sheet_name,
        path.display()
    );
    Ok(batch)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Null
            } else {
                CellValue::String(s.clone())
            }
        }
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => {
            // Whole floats are integers that went through a spreadsheet
            if f.fract() == 0.0 {
                CellValue::Int(*f as i64)
            } else {
                CellValue::Float(*f)
            }
        }
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => {
            CellValue::String(cell.to_string())
        }
        Data::Error(_) => CellValue::Null,
    }
}
