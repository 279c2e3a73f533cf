//! The `JourneySnapshot` output type.

use sleigh_core::{GeoPoint, JourneyPhase};

/// One recomputed view of the journey at a single instant.
///
/// Snapshots carry no identity and no lifecycle: every call to
/// [`snapshot_at`][crate::snapshot_at] rebuilds one from scratch, and no
/// snapshot depends on any prior snapshot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JourneySnapshot {
    /// Current phase of the yearly cycle.
    pub phase: JourneyPhase,

    /// Sleigh position: on the transit path while flying, home base
    /// (lat 90, lon −180) otherwise.
    pub position: GeoPoint,

    /// Human-readable status line combining phase and proximity.
    pub status: String,

    /// Whole kilometres between viewer and sleigh, floored.  Present only
    /// while in transit with a known viewer.
    pub distance_km: Option<u64>,

    /// Whole hours until the sleigh reaches the viewer's longitude (in
    /// transit), or until departure (preparing).  Absent once the sleigh
    /// has passed the viewer and once the journey is finished.
    pub hours_until_arrival: Option<u64>,

    /// Gifts delivered so far.  Zero before departure, monotonically
    /// non-decreasing across the transit, pinned at
    /// [`TOTAL_GIFTS`][crate::TOTAL_GIFTS] after return.
    pub gifts_delivered: u64,
}
