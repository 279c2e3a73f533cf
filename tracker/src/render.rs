//! Terminal rendering of a journey snapshot.

use chrono::NaiveDateTime;

use sleigh_core::{GeoPoint, JourneyPhase};
use sleigh_message::group_thousands;
use sleigh_sim::JourneySnapshot;

/// Print one snapshot as an indented status block.
pub fn print_snapshot(now: NaiveDateTime, viewer: Option<GeoPoint>, snapshot: &JourneySnapshot) {
    println!("── {} ──", now.format("%Y-%m-%d %H:%M:%S"));
    println!("  {}", snapshot.status);
    println!("  position: {}", snapshot.position);

    if let Some(km) = snapshot.distance_km {
        println!("  distance: {} km from your location", group_thousands(km));
    }
    if snapshot.gifts_delivered > 0 {
        println!(
            "  gifts delivered: {}",
            group_thousands(snapshot.gifts_delivered)
        );
    }
    // A zero countdown means "any moment now"; the status line already says so.
    if let Some(hours) = snapshot.hours_until_arrival {
        if hours > 0 {
            let what = match snapshot.phase {
                JourneyPhase::Preparing => "until departure",
                _ => "until arrival",
            };
            println!(
                "  {hours} hour{} {what}",
                if hours == 1 { "" } else { "s" }
            );
        }
    }
    if let Some(viewer) = viewer {
        println!("  your location: {viewer}");
    }
}
