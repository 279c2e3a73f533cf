//! CSV trace backend.
//!
//! Creates `journey_trace.csv` in the configured output directory.  Rows
//! are flushed as they are written so a live run can be tailed.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputResult, TraceRow};

/// Writes the journey trace to a single CSV file.
pub struct CsvTraceWriter {
    trace: Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Open (or create) `journey_trace.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trace = Writer::from_path(dir.join("journey_trace.csv"))?;
        trace.write_record([
            "timestamp",
            "phase",
            "latitude",
            "longitude",
            "gifts_delivered",
            "distance_km",
            "hours_until_arrival",
        ])?;
        trace.flush()?;

        Ok(Self {
            trace,
            finished: false,
        })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()> {
        self.trace.write_record(&[
            row.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            row.phase.clone(),
            row.latitude.to_string(),
            row.longitude.to_string(),
            row.gifts_delivered.to_string(),
            opt_cell(row.distance_km),
            opt_cell(row.hours_until_arrival),
        ])?;
        self.trace.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        Ok(())
    }
}

/// Absent optionals become empty cells.
fn opt_cell(value: Option<u64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}
