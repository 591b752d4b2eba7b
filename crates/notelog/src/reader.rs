use std::io::{self, Read};

use crate::format::{decode_payload, decode_varint};
use crate::{Entry, LogError};

/// Reads frames back to front from an in-memory tail of a log.
///
/// The whole stream handed to [`new`](ReverseReader::new) is loaded at
/// construction; the stream is never read again and is kept only so that
/// [`close`](ReverseReader::close) can release it. Each successful
/// [`read_entry`](ReverseReader::read_entry) shrinks the buffer from the end,
/// so the reader is a one-shot cursor: once drained it stays drained.
///
/// A buffer that starts in the middle of a frame (for example because the
/// caller seeked to a bounded tail of a large file) ends cleanly with
/// `Ok(None)` when the partial frame is reached.
pub struct ReverseReader<R = io::Empty> {
    to_process: Vec<u8>,
    handle: Option<R>,
    poisoned: bool,
}

impl<R: Read> ReverseReader<R> {
    /// Loads everything remaining in `handle` and keeps the handle for
    /// [`close`](ReverseReader::close).
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if the stream cannot be read to the end.
    pub fn new(mut handle: R) -> Result<Self, LogError> {
        let mut to_process = Vec::new();
        handle.read_to_end(&mut to_process)?;
        Ok(Self {
            to_process,
            handle: Some(handle),
            poisoned: false,
        })
    }
}

impl ReverseReader {
    /// Constructs a reader over bytes already in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            to_process: bytes.into(),
            handle: None,
            poisoned: false,
        }
    }
}

impl<R> ReverseReader<R> {
    /// Decodes the last complete frame in the buffer.
    ///
    /// # Termination
    ///
    /// - **Empty buffer** -> `Ok(None)`.
    /// - **Trailer claims more varint bytes than remain** -> `Ok(None)`.
    /// - **Payload would start before the buffer** -> `Ok(None)`.
    /// - **Bad varint** (unterminated, overflowing, or not exactly as long as
    ///   the trailer says) -> `Err(LogError::Corrupt)`.
    /// - **Payload length beyond `usize`** -> `Err(LogError::Corrupt)`.
    /// - **Undecodable payload** -> `Err(LogError::Decode)`.
    ///
    /// On error the buffer is left as it was.
    pub fn read_entry(&mut self) -> Result<Option<Entry>, LogError> {
        let Some((&trailer, sans_trailer)) = self.to_process.split_last() else {
            return Ok(None);
        };

        let n = usize::from(trailer);
        if n > sans_trailer.len() {
            return Ok(None);
        }

        let varint_start = sans_trailer.len() - n;
        let (payload_len, used) = decode_varint(&sans_trailer[varint_start..])?;
        if used != n {
            return Err(LogError::Corrupt("varint length disagrees with trailer"));
        }

        let payload_len = usize::try_from(payload_len)
            .map_err(|_| LogError::Corrupt("payload length exceeds addressable memory"))?;
        let Some(payload_start) = varint_start.checked_sub(payload_len) else {
            return Ok(None);
        };

        let entry = decode_payload(&sans_trailer[payload_start..varint_start])?;
        self.to_process.truncate(payload_start);
        Ok(Some(entry))
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.to_process.len()
    }

    /// Releases the underlying stream by dropping it.
    ///
    /// Consuming `self` guarantees the handle is released exactly once. The
    /// stream was only ever read, and `R`'s `Drop` has no way to report a
    /// failure, so this returns `Ok` for every handle.
    pub fn close(mut self) -> Result<(), LogError> {
        drop(self.handle.take());
        Ok(())
    }
}

/// Yields entries newest first. Iteration ends at the front of the buffer or
/// right after the first error.
impl<R> Iterator for ReverseReader<R> {
    type Item = Result<Entry, LogError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned {
            return None;
        }
        let item = self.read_entry().transpose();
        if matches!(item, Some(Err(_))) {
            self.poisoned = true;
        }
        item
    }
}
