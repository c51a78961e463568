//! DateTime parsing and formatting helpers.

use chrono::{DateTime, Utc};

/// Parses an RFC3339 timestamp string, returning an error if parsing fails.
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string is not valid RFC3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Humanized "time since" label for roster cards ("just now", "4 minutes
/// ago", "3 days ago").
///
/// `then` values in the future (clock skew) are treated as "just now".
pub fn humanize_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 0 {
        return "just now".to_string();
    }
    match seconds {
        0..=59 => "just now".to_string(),
        60..=3599 => plural(seconds / 60, "minute"),
        3600..=86_399 => plural(seconds / 3600, "hour"),
        _ => plural(seconds / 86_400, "day"),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_rfc3339() {
        let dt = parse_datetime("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_datetime("not-a-date").is_err());
    }

    #[test]
    fn recent_times_are_just_now() {
        let now = base();
        assert_eq!(humanize_since(now, now), "just now");
        assert_eq!(humanize_since(now - Duration::seconds(59), now), "just now");
    }

    #[test]
    fn minutes_hours_days() {
        let now = base();
        assert_eq!(
            humanize_since(now - Duration::minutes(1), now),
            "1 minute ago"
        );
        assert_eq!(
            humanize_since(now - Duration::minutes(4), now),
            "4 minutes ago"
        );
        assert_eq!(humanize_since(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(humanize_since(now - Duration::days(3), now), "3 days ago");
    }

    #[test]
    fn future_times_are_just_now() {
        let now = base();
        assert_eq!(humanize_since(now + Duration::minutes(5), now), "just now");
    }
}
