// Business logic services layer
//
// This module contains the pure classification and summary logic, decoupled
// from the CLI and reusable by any host that can hand over a RecordBatch.

pub mod classify;
pub mod summary;
