//! `sleigh-sim` — the journey simulator.
//!
//! One operation: [`snapshot_at`] maps `(now, optional viewer coordinate)`
//! to a [`JourneySnapshot`].  The function is total and pure — no I/O, no
//! stored state, no failure modes for any finite input — so callers may
//! invoke it at any cadence, out of order, or concurrently without
//! coordination.  Two calls with equal inputs always produce equal
//! snapshots.
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`simulator`] | `snapshot_at`, `transit_position`, constants    |
//! | [`snapshot`]  | `JourneySnapshot`                               |

pub mod simulator;
pub mod snapshot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use simulator::{HOME_BASE, TOTAL_GIFTS, snapshot_at, transit_position};
pub use snapshot::JourneySnapshot;
