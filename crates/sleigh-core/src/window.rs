//! The journey calendar window and progress arithmetic.
//!
//! # Design
//!
//! The flight is anchored to two fixed wall-clock instants in the calendar
//! year of the queried time: departure on Dec 24 at 18:00 and return on
//! Dec 25 at 06:00, naive local time (never adjusted for the viewer's
//! timezone).  Progress through the night is measured against a 24-hour
//! reference day rather than the 12-hour wall-clock window, so the westward
//! sweep covers half the globe by the return instant.  Every figure derived
//! from progress inherits that pacing.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::JourneyPhase;

/// Hour of Dec 24 at which the sleigh departs (18:00 local).
pub const DEPARTURE_HOUR: u32 = 18;

/// Hour of Dec 25 at which the sleigh returns (06:00 local).
pub const RETURN_HOUR: u32 = 6;

/// Reference duration the progress fraction is measured against, in hours.
pub const REFERENCE_HOURS: f64 = 24.0;

/// The two boundary instants of one year's flight.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JourneyWindow {
    /// Dec 24, 18:00 — first instant of the transit.
    pub departure: NaiveDateTime,
    /// Dec 25, 06:00 — first instant back at the North Pole (exclusive
    /// upper bound of the transit).
    pub return_home: NaiveDateTime,
}

impl JourneyWindow {
    /// The window for a given calendar year.
    pub fn for_year(year: i32) -> Self {
        Self {
            departure:   instant(year, 12, 24, DEPARTURE_HOUR),
            return_home: instant(year, 12, 25, RETURN_HOUR),
        }
    }

    /// The window of the year containing `now`.
    #[inline]
    pub fn containing(now: NaiveDateTime) -> Self {
        Self::for_year(now.year())
    }

    /// Phase of the journey at `now`.
    pub fn phase_at(&self, now: NaiveDateTime) -> JourneyPhase {
        if now < self.departure {
            JourneyPhase::Preparing
        } else if now < self.return_home {
            JourneyPhase::InTransit
        } else {
            JourneyPhase::Finished
        }
    }

    /// Fractional hours elapsed since departure.  Negative before it.
    pub fn hours_since_departure(&self, now: NaiveDateTime) -> f64 {
        signed_hours(self.departure, now)
    }

    /// Whole hours remaining until departure, floored.  Zero at or after
    /// departure (never negative).
    pub fn hours_until_departure(&self, now: NaiveDateTime) -> u64 {
        let hours = signed_hours(now, self.departure);
        if hours <= 0.0 { 0 } else { hours.floor() as u64 }
    }

    /// Fraction of the reference day completed at `now`.
    ///
    /// 0 at departure, 0.5 when the wall-clock window closes (see the
    /// module docs for the pacing convention).
    pub fn progress_at(&self, now: NaiveDateTime) -> f64 {
        self.hours_since_departure(now) / REFERENCE_HOURS
    }
}

/// Naive local instant at `hour:00:00` on `year-month-day`.
///
/// Dec 24/25 exist in every chrono-representable year, and `year` is always
/// taken from an in-range `NaiveDateTime`, so the fallback never fires.
fn instant(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Signed fractional hours from `from` to `to`.
fn signed_hours(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    // Millisecond resolution is ample for a once-per-second clock.
    (to - from).num_milliseconds() as f64 / 3_600_000.0
}
