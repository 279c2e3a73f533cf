//! Unit tests for prompt composition and the fallback path.
//!
//! The Ollama client itself is exercised manually against a live server;
//! everything around it is covered here through the `MessageSource` seam.

#[cfg(test)]
mod prompts {
    use sleigh_core::JourneyPhase;

    use crate::MessageContext;

    #[test]
    fn preparing_mentions_the_elves() {
        let ctx = MessageContext {
            phase: JourneyPhase::Preparing,
            distance_km: None,
            gifts_delivered: None,
        };
        let s = ctx.situation();
        assert!(s.contains("North Pole"));
        assert!(s.contains("elves"));
    }

    #[test]
    fn transit_with_figures() {
        let ctx = MessageContext {
            phase: JourneyPhase::InTransit,
            distance_km: Some(8_421),
            gifts_delivered: Some(1_234_567_890),
        };
        let s = ctx.situation();
        assert!(s.contains("He is about 8,421 km away from the user's location."));
        assert!(s.contains("He has delivered 1,234,567,890 gifts so far!"));
    }

    #[test]
    fn transit_without_viewer() {
        let ctx = MessageContext {
            phase: JourneyPhase::InTransit,
            distance_km: None,
            gifts_delivered: None,
        };
        let s = ctx.situation();
        assert!(s.contains("making his way across the globe"));
        assert!(!s.contains("km away"));
    }

    #[test]
    fn finished_mentions_the_reindeer() {
        let ctx = MessageContext {
            phase: JourneyPhase::Finished,
            distance_km: None,
            gifts_delivered: None,
        };
        assert!(ctx.situation().contains("resting"));
    }

    #[test]
    fn prompt_embeds_the_situation_and_tone_rules() {
        let ctx = MessageContext {
            phase: JourneyPhase::Preparing,
            distance_km: None,
            gifts_delivered: None,
        };
        let p = ctx.prompt();
        assert!(p.starts_with("You are Santa Claus!"));
        assert!(p.contains(&ctx.situation()));
        assert!(p.contains("Don't use quotation marks."));
    }

    #[test]
    fn from_snapshot_elides_a_zero_gift_counter() {
        use chrono::{NaiveDate, NaiveDateTime};
        use sleigh_sim::snapshot_at;

        let departure: NaiveDateTime = NaiveDate::from_ymd_opt(2025, 12, 24)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let ctx = MessageContext::from_snapshot(&snapshot_at(departure, None));
        assert_eq!(ctx.gifts_delivered, None);
    }
}

#[cfg(test)]
mod grouping {
    use crate::group_thousands;

    #[test]
    fn small_numbers_unchanged() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
    }

    #[test]
    fn separators_every_three_digits() {
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(123_456), "123,456");
        assert_eq!(group_thousands(2_000_000_000), "2,000,000,000");
    }
}

#[cfg(test)]
mod fallback {
    use sleigh_core::JourneyPhase;

    use crate::{FROSTY_FALLBACK, MessageContext, MessageError, MessageSource, message_or_fallback};

    struct Canned(&'static str);

    impl MessageSource for Canned {
        fn fetch(&self, _ctx: &MessageContext) -> crate::MessageResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct Frosty;

    impl MessageSource for Frosty {
        fn fetch(&self, _ctx: &MessageContext) -> crate::MessageResult<String> {
            Err(MessageError::Empty)
        }
    }

    fn ctx() -> MessageContext {
        MessageContext {
            phase: JourneyPhase::Finished,
            distance_km: None,
            gifts_delivered: None,
        }
    }

    #[test]
    fn passes_through_on_success() {
        assert_eq!(message_or_fallback(&Canned("Merry Christmas!"), &ctx()), "Merry Christmas!");
    }

    #[test]
    fn falls_back_on_failure() {
        assert_eq!(message_or_fallback(&Frosty, &ctx()), FROSTY_FALLBACK);
    }
}
