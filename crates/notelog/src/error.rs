use std::io;

use thiserror::Error;

/// Errors that can occur while encoding, appending or reading log frames.
///
/// Reaching the front of the buffer is not an error: readers report it as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum LogError {
    /// The entry could not be serialized into a payload.
    #[error("could not encode entry")]
    Encode(#[source] postcard::Error),

    /// A payload slice is not a valid encoding of an entry.
    #[error("could not decode entry")]
    Decode(#[source] postcard::Error),

    /// The frame envelope (trailer byte or length varint) is inconsistent.
    #[error("corrupt frame: {0}")]
    Corrupt(&'static str),

    /// An underlying I/O error.
    #[error("io error")]
    Io(#[from] io::Error),
}

impl LogError {
    /// Returns `true` for errors caused by malformed bytes rather than I/O.
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        matches!(self, LogError::Decode(_) | LogError::Corrupt(_))
    }
}
