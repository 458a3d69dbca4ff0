use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use nb_core::RawTimestamp;

/// Feeds occasionally carry impossible future dates; tolerate this much skew
/// before rejecting an entry as malformed.
const FUTURE_TOLERANCE_MINUTES: i64 = 10;

/// Normalizes a feed timestamp to a UTC instant. Returns None when the
/// timestamp is absent or unparseable.
pub fn normalize(ts: &RawTimestamp) -> Option<DateTime<Utc>> {
    match ts {
        RawTimestamp::Parts {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } => Utc
            .with_ymd_and_hms(*year, *month, *day, *hour, *minute, *second)
            .single(),
        RawTimestamp::Text(text) => parse_text(text.trim()),
        RawTimestamp::Missing => None,
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    // Naive strings are assumed UTC.
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// True iff the timestamp parses and falls strictly inside the lookback
/// window ending at `now`. A parse failure is "not recent", never an error:
/// one malformed entry must not abort collection of the rest.
pub fn is_recent(ts: &RawTimestamp, lookback_hours: i64, now: DateTime<Utc>) -> bool {
    let Some(instant) = normalize(ts) else {
        return false;
    };
    if instant > now + Duration::minutes(FUTURE_TOLERANCE_MINUTES) {
        return false;
    }
    instant > now - Duration::hours(lookback_hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 8, 9, 0, 0).unwrap()
    }

    fn hours_ago(h: i64) -> RawTimestamp {
        RawTimestamp::Text((now() - Duration::hours(h)).to_rfc2822())
    }

    #[test]
    fn accepts_inside_window() {
        assert!(is_recent(&hours_ago(23), 24, now()));
        assert!(is_recent(&hours_ago(1), 24, now()));
    }

    #[test]
    fn rejects_outside_window() {
        assert!(!is_recent(&hours_ago(25), 24, now()));
        // The boundary itself is excluded: strictly newer is required.
        assert!(!is_recent(&hours_ago(24), 24, now()));
    }

    #[test]
    fn rejects_far_future_dates() {
        let eleven_min_ahead = RawTimestamp::Text((now() + Duration::minutes(11)).to_rfc2822());
        assert!(!is_recent(&eleven_min_ahead, 24, now()));
        // Small skew is tolerated.
        let five_min_ahead = RawTimestamp::Text((now() + Duration::minutes(5)).to_rfc2822());
        assert!(is_recent(&five_min_ahead, 24, now()));
    }

    #[test]
    fn rejects_unparseable_and_missing() {
        assert!(!is_recent(&RawTimestamp::Text("soon".to_string()), 24, now()));
        assert!(!is_recent(&RawTimestamp::Text(String::new()), 24, now()));
        assert!(!is_recent(&RawTimestamp::Missing, 24, now()));
    }

    #[test]
    fn normalizes_structured_parts() {
        let ts = RawTimestamp::Parts {
            year: 2026,
            month: 1,
            day: 8,
            hour: 8,
            minute: 30,
            second: 0,
        };
        assert_eq!(
            normalize(&ts),
            Some(Utc.with_ymd_and_hms(2026, 1, 8, 8, 30, 0).unwrap())
        );
        assert!(is_recent(&ts, 24, now()));

        let invalid = RawTimestamp::Parts {
            year: 2026,
            month: 13,
            day: 40,
            hour: 0,
            minute: 0,
            second: 0,
        };
        assert_eq!(normalize(&invalid), None);
    }

    #[test]
    fn normalizes_text_shapes() {
        // RFC 2822 with a non-UTC zone.
        let kst = RawTimestamp::Text("Thu, 08 Jan 2026 17:30:00 +0900".to_string());
        assert_eq!(
            normalize(&kst),
            Some(Utc.with_ymd_and_hms(2026, 1, 8, 8, 30, 0).unwrap())
        );
        // RFC 3339.
        let rfc3339 = RawTimestamp::Text("2026-01-08T08:30:00Z".to_string());
        assert_eq!(
            normalize(&rfc3339),
            Some(Utc.with_ymd_and_hms(2026, 1, 8, 8, 30, 0).unwrap())
        );
        // Naive, assumed UTC.
        let naive = RawTimestamp::Text("2026-01-08 08:30:00".to_string());
        assert_eq!(
            normalize(&naive),
            Some(Utc.with_ymd_and_hms(2026, 1, 8, 8, 30, 0).unwrap())
        );
    }
}
