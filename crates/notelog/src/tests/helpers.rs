use chrono::{DateTime, FixedOffset, TimeZone};

use crate::{encode_frame, Entry};

pub fn epoch() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .timestamp_opt(0, 0)
        .unwrap()
}

pub fn at(secs: i64, nanos: u32, offset_secs: i32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(offset_secs)
        .unwrap()
        .timestamp_opt(secs, nanos)
        .unwrap()
}

pub fn make_entry(note: &str, tags: &[&str]) -> Entry {
    Entry::new(note, tags.iter().map(|t| t.to_string()).collect(), epoch())
}

/// Concatenates the frames of `entries`, oldest first.
pub fn log_of(entries: &[Entry]) -> Vec<u8> {
    let mut log = Vec::new();
    for e in entries {
        log.extend_from_slice(&encode_frame(e).unwrap());
    }
    log
}

/// Byte offset at which each frame of `log_of(entries)` starts.
pub fn frame_starts(entries: &[Entry]) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut pos = 0;
    for e in entries {
        starts.push(pos);
        pos += encode_frame(e).unwrap().len();
    }
    starts
}
