//! SQLite trace backend (feature `sqlite`).
//!
//! Creates `journey_trace.db` in the configured output directory with a
//! single `journey_trace` table.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::TraceWriter;
use crate::{OutputResult, TraceRow};

/// Writes the journey trace to an SQLite database.
pub struct SqliteTraceWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteTraceWriter {
    /// Open (or create) `journey_trace.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("journey_trace.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS journey_trace (
                 timestamp           TEXT    NOT NULL,
                 phase               TEXT    NOT NULL,
                 latitude            REAL    NOT NULL,
                 longitude           REAL    NOT NULL,
                 gifts_delivered     INTEGER NOT NULL,
                 distance_km         INTEGER,
                 hours_until_arrival INTEGER
             );",
        )?;

        Ok(Self {
            conn,
            finished: false,
        })
    }
}

impl TraceWriter for SqliteTraceWriter {
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO journey_trace \
             (timestamp, phase, latitude, longitude, gifts_delivered, distance_km, hours_until_arrival) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        stmt.execute(rusqlite::params![
            row.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            row.phase,
            row.latitude,
            row.longitude,
            row.gifts_delivered,
            row.distance_km,
            row.hours_until_arrival,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
