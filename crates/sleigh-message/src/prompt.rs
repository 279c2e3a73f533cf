//! Prompt composition for the Santa message.

use sleigh_core::JourneyPhase;
use sleigh_sim::JourneySnapshot;

/// The journey figures worth mentioning to the language model.
///
/// Built from a [`JourneySnapshot`]; carries only what the prompt needs so
/// a context can also be constructed directly in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageContext {
    pub phase: JourneyPhase,
    pub distance_km: Option<u64>,
    pub gifts_delivered: Option<u64>,
}

impl MessageContext {
    /// Capture the prompt-relevant figures from a snapshot.
    ///
    /// A zero gift counter is treated as "nothing to brag about yet" and
    /// left out of the prompt.
    pub fn from_snapshot(snapshot: &JourneySnapshot) -> Self {
        Self {
            phase: snapshot.phase,
            distance_km: snapshot.distance_km,
            gifts_delivered: (snapshot.gifts_delivered > 0).then_some(snapshot.gifts_delivered),
        }
    }

    /// The situation sentences embedded in the prompt.
    pub fn situation(&self) -> String {
        match self.phase {
            JourneyPhase::Preparing => {
                "Santa is at the North Pole preparing for Christmas Eve. \
                 The elves are busy wrapping presents."
                    .to_string()
            }
            JourneyPhase::InTransit => {
                let mut s =
                    String::from("Santa is currently delivering presents around the world! ");
                match self.distance_km {
                    Some(km) => {
                        s.push_str(&format!(
                            "He is about {} km away from the user's location.",
                            group_thousands(km)
                        ));
                    }
                    None => s.push_str("He is making his way across the globe."),
                }
                if let Some(gifts) = self.gifts_delivered {
                    s.push_str(&format!(
                        " He has delivered {} gifts so far!",
                        group_thousands(gifts)
                    ));
                }
                s
            }
            JourneyPhase::Finished => {
                "Santa has finished his Christmas deliveries and is resting \
                 at the North Pole with the reindeer."
                    .to_string()
            }
        }
    }

    /// The full instruction prompt sent to the generation service.
    pub fn prompt(&self) -> String {
        format!(
            "You are Santa Claus! Write a cheerful, warm message (2-3 sentences max) \
             to someone tracking your journey. {} Be jolly, mention the reindeer if \
             relevant, and keep it magical and brief. Use emojis sparingly (1-2 max). \
             Don't use quotation marks.",
            self.situation()
        )
    }
}

/// Format an integer with comma thousands separators: 1234567 → "1,234,567".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
