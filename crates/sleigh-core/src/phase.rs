//! The three mutually exclusive journey phases.

use std::fmt;

/// Where the sleigh is in its yearly cycle.
///
/// Transitions are one-directional for a forward-moving clock
/// (`Preparing → InTransit → Finished`) and are keyed purely on comparing
/// the queried instant against the journey window boundaries — there is no
/// stored state and no other transition path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum JourneyPhase {
    /// Before departure: loading the sleigh at the North Pole.
    Preparing,
    /// Between departure and return: sweeping westward from +180°.
    InTransit,
    /// At or after the return instant: back at the North Pole.
    Finished,
}

impl JourneyPhase {
    /// `true` only while the sleigh is actually flying.
    #[inline]
    pub fn is_in_transit(self) -> bool {
        matches!(self, JourneyPhase::InTransit)
    }
}

impl fmt::Display for JourneyPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JourneyPhase::Preparing => "preparing",
            JourneyPhase::InTransit => "in_transit",
            JourneyPhase::Finished => "finished",
        })
    }
}
