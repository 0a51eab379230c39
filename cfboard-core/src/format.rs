//! Formatting helpers shared across UIs.

use chrono::{DateTime, Utc};

/// Format a timestamp as relative time (e.g., "2m ago").
///
/// Takes `now` as an argument so callers that snapshot the clock once per
/// analytics pass get display text consistent with that snapshot.
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(ts);

    if duration.num_seconds() < 0 {
        "just now".to_string()
    } else if duration.num_seconds() < 60 {
        format!("{}s ago", duration.num_seconds())
    } else if duration.num_minutes() < 60 {
        format!("{}m ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_days() < 7 {
        format!("{}d ago", duration.num_days())
    } else {
        ts.format("%b %d %Y").to_string()
    }
}

/// Format an optional timestamp as relative time, or "Not Synced" if missing.
pub fn relative_time_opt(ts: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match ts {
        Some(ts) => relative_time(ts, now),
        None => "Not Synced".to_string(),
    }
}

/// Sign-prefixed rating delta, "+23" or "-15". Zero displays as "+0".
pub fn signed_delta(delta: i32) -> String {
    if delta >= 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_time() {
        let now = Utc::now();
        assert_eq!(relative_time(now - Duration::seconds(5), now), "5s ago");
        assert_eq!(relative_time(now - Duration::minutes(2), now), "2m ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative_time(now - Duration::days(2), now), "2d ago");
        assert_eq!(relative_time(now + Duration::seconds(30), now), "just now");
    }

    #[test]
    fn test_relative_time_opt() {
        let now = Utc::now();
        assert_eq!(relative_time_opt(None, now), "Not Synced");
        assert_eq!(
            relative_time_opt(Some(now - Duration::minutes(9)), now),
            "9m ago"
        );
    }

    #[test]
    fn test_signed_delta() {
        assert_eq!(signed_delta(23), "+23");
        assert_eq!(signed_delta(-15), "-15");
        assert_eq!(signed_delta(0), "+0");
    }
}
