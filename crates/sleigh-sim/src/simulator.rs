//! `snapshot_at` — a total pure function from time to journey snapshot.

use chrono::NaiveDateTime;

use sleigh_core::{GeoPoint, JourneyPhase, JourneyWindow, REFERENCE_HOURS};

use crate::JourneySnapshot;

/// Gifts delivered over one full reference day.
pub const TOTAL_GIFTS: u64 = 2_000_000_000;

/// Where the sleigh rests before departure and after return.  Symbolic —
/// never used for distance figures.
pub const HOME_BASE: GeoPoint = GeoPoint { lat: 90.0, lon: -180.0 };

/// Compute the journey snapshot for `now`.
///
/// Total over its inputs: any finite instant and any finite (or absent)
/// viewer coordinate produces a snapshot.  Out-of-range viewer values are
/// processed arithmetically rather than rejected; callers wanting strict
/// bounds validate before calling in.
pub fn snapshot_at(now: NaiveDateTime, viewer: Option<GeoPoint>) -> JourneySnapshot {
    let window = JourneyWindow::containing(now);
    match window.phase_at(now) {
        JourneyPhase::Preparing => JourneySnapshot {
            phase: JourneyPhase::Preparing,
            position: HOME_BASE,
            status: "Preparing at the North Pole".to_string(),
            distance_km: None,
            hours_until_arrival: Some(window.hours_until_departure(now)),
            gifts_delivered: 0,
        },
        JourneyPhase::InTransit => in_transit(window.progress_at(now), viewer),
        JourneyPhase::Finished => JourneySnapshot {
            phase: JourneyPhase::Finished,
            position: HOME_BASE,
            status: "Back at the North Pole".to_string(),
            distance_km: None,
            hours_until_arrival: None,
            gifts_delivered: TOTAL_GIFTS,
        },
    }
}

/// Sleigh position on the transit path at a progress fraction.
///
/// Longitude sweeps west from +180° as a continuous decreasing value with
/// no modulo wrap; under the 24-hour reference pacing progress never
/// exceeds 0.5, so the computed range is [0°, 180°].  Latitude oscillates
/// between 25° and 65°, four full waves per reference day.
pub fn transit_position(progress: f64) -> GeoPoint {
    GeoPoint {
        lat: 45.0 + (progress * 4.0 * std::f64::consts::PI).sin() * 20.0,
        lon: 180.0 - progress * 360.0,
    }
}

fn in_transit(progress: f64, viewer: Option<GeoPoint>) -> JourneySnapshot {
    let position = transit_position(progress);

    let mut status = "Out for delivery!".to_string();
    let mut hours_until_arrival = None;
    if let Some(viewer) = viewer {
        if position.lon < viewer.lon {
            // Already swept past the viewer's longitude.
            status = "Santa has visited your area!".to_string();
        } else {
            let hours = hours_away(position.lon, viewer.lon);
            status = arrival_status(hours);
            hours_until_arrival = Some(hours);
        }
    }

    JourneySnapshot {
        phase: JourneyPhase::InTransit,
        position,
        status,
        distance_km: viewer.map(|v| v.distance_km(position).floor() as u64),
        hours_until_arrival,
        gifts_delivered: (progress * TOTAL_GIFTS as f64).floor() as u64,
    }
}

/// Whole hours until the sleigh crosses `viewer_lon`, estimated from the
/// longitude gap at the reference sweep rate.  Clamped at zero.
fn hours_away(sleigh_lon: f64, viewer_lon: f64) -> u64 {
    let gap = (sleigh_lon - viewer_lon) / 360.0 * REFERENCE_HOURS;
    gap.max(0.0).floor() as u64
}

fn arrival_status(hours: u64) -> String {
    let unit = if hours == 1 { "hour" } else { "hours" };
    format!("Santa is {hours} {unit} away!")
}
