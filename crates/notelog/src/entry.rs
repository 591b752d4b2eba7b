use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Serialize};

/// A single note in the log.
///
/// Entries are immutable once appended. The codec keeps `tags` in the order
/// it is given; callers that want sorted tags sort them before writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Free text of the note. May be empty.
    pub note: String,
    /// When the note was taken, with the UTC offset it was taken in.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<FixedOffset>,
    /// Tags attached to the note.
    pub tags: Vec<String>,
}

impl Entry {
    pub fn new(
        note: impl Into<String>,
        tags: Vec<String>,
        created_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            note: note.into(),
            created_at,
            tags,
        }
    }
}

/// Stores an instant as `(unix seconds, nanoseconds, offset seconds)`.
///
/// Every field is kept exactly, including offsets with a seconds part and
/// leap-second nanoseconds.
mod timestamp {
    use super::*;
    use serde::de::Error;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<FixedOffset>, s: S) -> Result<S::Ok, S::Error> {
        (
            at.timestamp(),
            at.timestamp_subsec_nanos(),
            at.offset().local_minus_utc(),
        )
            .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<FixedOffset>, D::Error> {
        let (secs, nanos, offset): (i64, u32, i32) = Deserialize::deserialize(d)?;
        let tz = FixedOffset::east_opt(offset)
            .ok_or_else(|| D::Error::custom("utc offset out of range"))?;
        tz.timestamp_opt(secs, nanos)
            .single()
            .ok_or_else(|| D::Error::custom("timestamp out of range"))
    }
}
