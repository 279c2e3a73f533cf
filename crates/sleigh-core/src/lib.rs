//! `sleigh-core` — foundational types for the sleigh tracker.
//!
//! This crate is a dependency of every other `sleigh-*` crate.  It
//! intentionally has no sibling dependencies and minimal external ones
//! (only `chrono`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`geo`]    | `GeoPoint`, haversine distance                        |
//! | [`phase`]  | `JourneyPhase` — the three-state journey cycle        |
//! | [`window`] | `JourneyWindow`, progress and countdown arithmetic    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod phase;
pub mod window;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use phase::JourneyPhase;
pub use window::{DEPARTURE_HOUR, JourneyWindow, REFERENCE_HOURS, RETURN_HOUR};
