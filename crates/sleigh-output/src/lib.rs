//! `sleigh-output` — journey trace writers for the sleigh tracker.
//!
//! Two backends are provided, one behind a Cargo feature:
//!
//! | Feature  | Backend | File created        |
//! |----------|---------|---------------------|
//! | *(none)* | CSV     | `journey_trace.csv` |
//! | `sqlite` | SQLite  | `journey_trace.db`  |
//!
//! Both implement [`TraceWriter`] and consume [`TraceRow`]s flattened from
//! journey snapshots.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sleigh_output::{CsvTraceWriter, TraceRow, TraceWriter};
//!
//! let mut writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! writer.write_row(&TraceRow::from_snapshot(now, &snapshot))?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use row::TraceRow;
pub use writer::TraceWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteTraceWriter;
