//! Daily offer countdown shown next to the buy button.

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::fmt;

/// Time left until the end of the current day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OfferCountdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl fmt::Display for OfferCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Remaining time between `now` (local wall time) and 23:59:59.999 the same day.
pub fn offer_countdown(now: NaiveDateTime) -> OfferCountdown {
    let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
        .map(|t| now.date().and_time(t))
        .unwrap_or(now);

    let remaining_ms = (end_of_day - now).num_milliseconds().max(0);
    let total_seconds = u32::try_from(remaining_ms / 1000).unwrap_or(0);

    OfferCountdown {
        hours: (total_seconds / 3600) % 24,
        minutes: (total_seconds % 3600) / 60,
        seconds: total_seconds % 60,
    }
}
