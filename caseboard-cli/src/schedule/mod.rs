//! Schedule domain types
//!
//! Tabular case records as they arrive from a spreadsheet export, plus the
//! closed category/shift enumerations the classification pipeline maps them
//! into. Nothing here knows where a batch came from or how it is displayed.

pub mod category;
pub mod columns;
pub mod record;
pub mod sanitize;
pub mod shift;
pub mod value;

pub use category::Category;
pub use columns::{PROC_TEXT_CANDIDATES, TIME_CANDIDATES, pick_column};
pub use record::RecordBatch;
pub use shift::Shift;
pub use value::CellValue;
