//! Integration tests for sleigh-output.

use chrono::{NaiveDate, NaiveDateTime};

use crate::TraceRow;

fn ts(h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 24)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn transit_row(h: u32, mi: u32) -> TraceRow {
    TraceRow {
        timestamp: ts(h, mi),
        phase: "in_transit".to_string(),
        latitude: 52.5,
        longitude: 103.25,
        gifts_delivered: 425_000_000,
        distance_km: Some(7_812),
        hours_until_arrival: Some(3),
    }
}

fn preparing_row() -> TraceRow {
    TraceRow {
        timestamp: ts(12, 0),
        phase: "preparing".to_string(),
        latitude: 90.0,
        longitude: -180.0,
        gifts_delivered: 0,
        distance_km: None,
        hours_until_arrival: Some(6),
    }
}

#[cfg(test)]
mod row {
    use super::*;
    use sleigh_core::GeoPoint;
    use sleigh_sim::snapshot_at;

    #[test]
    fn flattens_a_snapshot() {
        let now = ts(20, 30);
        let snapshot = snapshot_at(now, Some(GeoPoint::new(47.6, -122.3)));
        let row = TraceRow::from_snapshot(now, &snapshot);
        assert_eq!(row.timestamp, now);
        assert_eq!(row.phase, "in_transit");
        assert_eq!(row.latitude, snapshot.position.lat);
        assert_eq!(row.longitude, snapshot.position.lon);
        assert_eq!(row.distance_km, snapshot.distance_km);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvTraceWriter;
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn file_created_with_header() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("journey_trace.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "timestamp",
                "phase",
                "latitude",
                "longitude",
                "gifts_delivered",
                "distance_km",
                "hours_until_arrival"
            ]
        );
    }

    #[test]
    fn row_round_trip() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_row(&transit_row(22, 15)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("journey_trace.csv")).unwrap();
        let record = rdr.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "2025-12-24T22:15:00");
        assert_eq!(&record[1], "in_transit");
        assert_eq!(&record[2], "52.5");
        assert_eq!(&record[3], "103.25");
        assert_eq!(&record[4], "425000000");
        assert_eq!(&record[5], "7812");
        assert_eq!(&record[6], "3");
    }

    #[test]
    fn absent_optionals_are_empty_cells() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_row(&preparing_row()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("journey_trace.csv")).unwrap();
        let record = rdr.records().next().unwrap().unwrap();
        assert_eq!(&record[5], "");
        assert_eq!(&record[6], "6");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteTraceWriter;
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn rows_inserted_with_nulls_preserved() {
        let dir = tmp();
        let mut w = SqliteTraceWriter::new(dir.path()).unwrap();
        w.write_row(&transit_row(23, 0)).unwrap();
        w.write_row(&preparing_row()).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("journey_trace.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM journey_trace", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let nulls: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM journey_trace WHERE distance_km IS NULL",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(nulls, 1);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = SqliteTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
