//! Ordered tabular case records
//!
//! A `RecordBatch` is one day's schedule as it arrived: named columns and
//! rows of cells. Row position is the only record identity — it is stable
//! within a batch and is what the completion tracker refers to.

use super::value::CellValue;

static NULL_CELL: CellValue = CellValue::Null;

/// An ordered batch of case records
#[derive(Debug, Clone, Default)]
pub struct RecordBatch {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl RecordBatch {
    /// Create an empty batch with the given column headers (trimmed)
    pub fn new(headers: Vec<String>) -> Self {
        let headers = headers.into_iter().map(|h| h.trim().to_string()).collect();
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row; short rows are padded with blanks, long rows truncated
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.headers.len(), CellValue::Null);
        self.rows.push(row);
    }

    /// Column headers in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the batch has no records
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (row, column); out-of-range positions read as blank
    pub fn value(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&NULL_CELL)
    }

    /// Exact-name column lookup (header names are already trimmed)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}
