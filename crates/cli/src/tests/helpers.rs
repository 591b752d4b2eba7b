use chrono::{DateTime, FixedOffset, TimeZone};
use notelog::{Entry, LogError};

pub fn at(secs: i64, millis: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .timestamp_opt(secs, millis * 1_000_000)
        .unwrap()
}

pub fn entry(note: &str, tags: &[&str], created_at: DateTime<FixedOffset>) -> Entry {
    Entry::new(note, tags.iter().map(|t| t.to_string()).collect(), created_at)
}

/// Renders `entries` (newest first) and returns the printed lines.
pub fn render(entries: Vec<Entry>) -> Vec<String> {
    let mut out = Vec::new();
    let items = entries.into_iter().map(Ok::<_, LogError>);
    crate::output::write_table(&mut out, items).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

pub const DAY: i64 = 24 * 60 * 60;
