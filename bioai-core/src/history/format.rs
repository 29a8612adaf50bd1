use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

const PREVIEW_CHARS: usize = 20;

/// First 20 characters of `sequence`, with `...` when truncated.
pub fn sequence_preview(sequence: &str) -> String {
    if sequence.is_empty() {
        return "N/A".to_string();
    }
    let mut chars = sequence.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// `YYYY-MM-DD HH:MM:SS` in the given zone (the browser's local zone in the UI).
pub fn format_timestamp<Tz>(timestamp: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .with_timezone(zone)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
