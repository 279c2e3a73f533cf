//! Plain data row type written by trace backends.

use chrono::NaiveDateTime;

use sleigh_sim::JourneySnapshot;

/// One journey snapshot flattened for output.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRow {
    /// The instant the snapshot was computed for.
    pub timestamp: NaiveDateTime,
    pub phase: String,
    pub latitude: f64,
    pub longitude: f64,
    pub gifts_delivered: u64,
    /// Absent outside transit or without a viewer; rendered as an empty
    /// cell (CSV) or NULL (SQLite).
    pub distance_km: Option<u64>,
    pub hours_until_arrival: Option<u64>,
}

impl TraceRow {
    /// Flatten `snapshot` as observed at `timestamp`.
    pub fn from_snapshot(timestamp: NaiveDateTime, snapshot: &JourneySnapshot) -> Self {
        Self {
            timestamp,
            phase: snapshot.phase.to_string(),
            latitude: snapshot.position.lat,
            longitude: snapshot.position.lon,
            gifts_delivered: snapshot.gifts_delivered,
            distance_km: snapshot.distance_km,
            hours_until_arrival: snapshot.hours_until_arrival,
        }
    }
}
