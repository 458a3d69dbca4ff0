use chrono::Weekday;

/// Per-run lookback window: hours drive the recency filter, days drive the
/// freshness directive sent to the search backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookback {
    pub hours: i64,
    pub days: u32,
}

impl Lookback {
    pub const DAILY: Lookback = Lookback { hours: 24, days: 1 };
    /// Monday bridges the weekend gap since weekend runs are skipped.
    pub const WEEKEND_BRIDGE: Lookback = Lookback { hours: 72, days: 3 };
}

/// None means the run is skipped entirely (weekends).
pub fn lookback_for(weekday: Weekday) -> Option<Lookback> {
    match weekday {
        Weekday::Sat | Weekday::Sun => None,
        Weekday::Mon => Some(Lookback::WEEKEND_BRIDGE),
        _ => Some(Lookback::DAILY),
    }
}
