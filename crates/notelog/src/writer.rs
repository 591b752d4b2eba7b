use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::format::{encode_frame_into, SUN_EXTENSION};
use crate::{Entry, LogError};

/// Name of the log file holding the notes of `year`, e.g. `2024.sun`.
#[must_use]
pub fn sun_filename(year: i32) -> String {
    format!("{year}{SUN_EXTENSION}")
}

/// Append-only log writer.
///
/// Each entry is encoded into a reusable scratch buffer and handed to the
/// sink in a single `write_all` call. A failed write is reported and never
/// retried.
pub struct LogWriter<W: Write> {
    sink: W,
    /// Reusable scratch buffer to avoid allocation on every append.
    buf: Vec<u8>,
}

impl LogWriter<File> {
    /// Opens (or creates) a log file in append mode.
    ///
    /// New files are created readable and writable by the owner only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let mut opts = OpenOptions::new();
        opts.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(0o600);
        }
        Ok(Self::new(opts.open(path)?))
    }
}

impl<W: Write> LogWriter<W> {
    /// Wraps any writer. The writer is expected to append.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            buf: Vec::with_capacity(256),
        }
    }

    /// Encodes `entry` and appends the frame, returning its length.
    pub fn append(&mut self, entry: &Entry) -> Result<usize, LogError> {
        self.buf.clear();
        let len = encode_frame_into(&mut self.buf, entry)?;

        // Single write call for the entire frame
        self.sink.write_all(&self.buf)?;
        self.sink.flush()?;

        Ok(len)
    }

    /// Borrows the sink, e.g. to inspect what has been appended so far.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Unwraps the writer, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
