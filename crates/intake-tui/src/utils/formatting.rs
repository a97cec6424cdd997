//! Text and data formatting utilities

use chrono::{DateTime, NaiveDateTime, TimeZone};
use std::fmt::Display;

/// Format a wall-clock reading for the status line
pub fn format_clock(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Format a timestamp with date for the override log
pub fn format_timestamp_detailed<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a minute count as hours and minutes
pub fn format_minutes(minutes: u64) -> String {
    if minutes >= 60 {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

/// Truncate text to fit within a given width, adding ellipsis if needed
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let count = text.chars().count();
    if count <= max_width {
        text.to_string()
    } else if max_width <= 3 {
        "...".to_string()
    } else {
        let kept: String = text.chars().take(max_width - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello world", 20), "hello world");
        assert_eq!(truncate_text("hello world", 8), "hello...");
        assert_eq!(truncate_text("hello world", 3), "...");
        assert_eq!(truncate_text("hi", 1), "...");
        assert_eq!(truncate_text("Triage 1–3", 9), "Triage...");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(59), "59m");
        assert_eq!(format_minutes(125), "2h 05m");
    }

    #[test]
    fn test_timestamps() {
        let naive = NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(7, 5, 9)
            .unwrap();
        assert_eq!(format_clock(&naive), "07:05");
        assert_eq!(
            format_timestamp_detailed(&Utc.from_utc_datetime(&naive)),
            "2026-02-01 07:05:09"
        );
    }
}
