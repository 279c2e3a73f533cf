//! The `TraceWriter` trait implemented by all backend writers.

use crate::{OutputResult, TraceRow};

/// Trait implemented by the CSV and SQLite trace writers.
pub trait TraceWriter {
    /// Append one row to the trace.
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
