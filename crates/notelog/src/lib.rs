//! # notelog - append-only note log
//!
//! Storage format for the `sun` note taker. Every note is appended to a
//! yearly log file as a self-delimiting frame, and read back **newest first**
//! by peeling frames off the end of the file. No index is kept and no
//! forward scan is ever needed, so reading the latest notes only costs the
//! bytes of a bounded tail.
//!
//! ## Frame Format
//!
//! ```text
//! [payload ...][varint(payload_len): n bytes][n: u8]
//! ```
//!
//! - `payload` is the postcard encoding of an [`Entry`].
//! - `varint(payload_len)` is an unsigned LEB128 integer (1..=10 bytes).
//! - the final byte `n` is the length of that varint.
//!
//! Because the lengths sit **after** the payload, a reader positioned at the
//! end of a buffer recovers frame boundaries without looking at byte 0.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::{FixedOffset, TimeZone};
//! use notelog::{Entry, LogWriter, ReverseReader};
//!
//! let created_at = FixedOffset::east_opt(0).unwrap().timestamp_opt(0, 0).unwrap();
//! let mut w = LogWriter::open("2024.sun").unwrap();
//! w.append(&Entry::new("wrote the parser", vec!["rust".into()], created_at)).unwrap();
//! drop(w);
//!
//! let mut r = ReverseReader::new(std::fs::File::open("2024.sun").unwrap()).unwrap();
//! while let Some(entry) = r.read_entry().unwrap() {
//!     println!("{} {}", entry.created_at, entry.note);
//! }
//! r.close().unwrap();
//! ```

mod entry;
mod error;
mod format;
mod reader;
mod writer;

pub use entry::Entry;
pub use error::LogError;
pub use format::{
    decode_payload, decode_varint, encode_frame, encode_frame_into, encode_varint, varint_len,
    MAX_VARINT_BYTES, SUN_EXTENSION, TRAILER_BYTES,
};
pub use reader::ReverseReader;
pub use writer::{sun_filename, LogWriter};

#[cfg(test)]
mod tests;
