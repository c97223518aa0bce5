//! Human-readable date and duration formatting
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial release with medium date-time and countdown formatting

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Medium date-time layout, e.g. "Jan 5, 2025, 3:00 PM"
pub const MEDIUM_DATETIME: &str = "%b %-d, %Y, %-I:%M %p";

/// Format a zoned date-time with the medium layout
pub fn format_medium<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(MEDIUM_DATETIME).to_string()
}

/// Time remaining before `release`, or `None` once it has been reached
pub fn time_until_release(release: DateTime<Utc>, now: DateTime<Utc>) -> Option<Duration> {
    if release > now {
        Some(release - now)
    } else {
        None
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Format a duration in seconds into a countdown string
pub fn format_countdown(seconds: i64) -> String {
    let seconds = seconds.max(0);
    if seconds < 60 {
        format!("{} second{}", seconds, plural(seconds))
    } else if seconds < 3600 {
        let mins = seconds / 60;
        format!("{} minute{}", mins, plural(mins))
    } else if seconds < 86400 {
        let hours = seconds / 3600;
        let mins = (seconds % 3600) / 60;
        if mins > 0 {
            format!("{} hour{} {} minute{}", hours, plural(hours), mins, plural(mins))
        } else {
            format!("{} hour{}", hours, plural(hours))
        }
    } else {
        let days = seconds / 86400;
        let hours = (seconds % 86400) / 3600;
        if hours > 0 {
            format!("{} day{} {} hour{}", days, plural(days), hours, plural(hours))
        } else {
            format!("{} day{}", days, plural(days))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(30), "30 seconds");
        assert_eq!(format_countdown(1), "1 second");
        assert_eq!(format_countdown(60), "1 minute");
        assert_eq!(format_countdown(120), "2 minutes");
        assert_eq!(format_countdown(3600), "1 hour");
        assert_eq!(format_countdown(3660), "1 hour 1 minute");
        assert_eq!(format_countdown(86400), "1 day");
        assert_eq!(format_countdown(90000), "1 day 1 hour");
        assert_eq!(format_countdown(-5), "0 seconds");
    }

    #[test]
    fn test_time_until_release() {
        let release = Utc.with_ymd_and_hms(2025, 1, 5, 20, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2025, 1, 5, 19, 0, 0).unwrap();

        assert_eq!(time_until_release(release, before), Some(Duration::hours(1)));
        assert_eq!(time_until_release(release, release), None);
    }

    #[test]
    fn test_format_medium_utc() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 5, 20, 0, 0).unwrap();
        assert_eq!(format_medium(&dt), "Jan 5, 2025, 8:00 PM");
    }
}
