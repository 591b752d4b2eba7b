//! # Storage - yearly note log files
//!
//! Ties the [`notelog`] frame format to files named after the calendar year.
//!
//! ```text
//! write()        -> <current_year>.sun  (append one frame)
//!
//! entry_reader() -> <current_year>.sun  if it exists
//!                   <current_year-1>.sun otherwise
//!                   StorageError::NoData if neither exists
//!                   |
//!                   |  (size > tail_bytes?)  yes -> seek to size - tail_bytes
//!                   v
//!                 ReverseReader (newest entry first)
//! ```
//!
//! Only the last `tail_bytes` of a file are ever loaded, so reading the
//! latest notes costs the same no matter how large the year's log has grown.
//! Once the reader reaches the artificial front edge of that tail it simply
//! reports the end of the log.

mod backend;
mod error;

pub use backend::{Backend, FsBackend};
pub use error::StorageError;

use std::io::{Seek, SeekFrom};

use config::Config;
use notelog::{sun_filename, Entry, ReverseReader};
use tracing::debug;

/// Yearly log files behind a [`Backend`].
pub struct Storage<B: Backend> {
    backend: B,
    tail_bytes: u64,
    current_year: i32,
}

impl<B: Backend> Storage<B> {
    /// `current_year` decides which file is written and which is read first.
    pub fn new(backend: B, config: &Config, current_year: i32) -> Self {
        Self {
            backend,
            tail_bytes: config.tail_bytes,
            current_year,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Picks the file to read: this year's, else last year's.
    ///
    /// Returns the file name and its size, or `None` if neither exists.
    pub fn data_file(&self) -> Result<Option<(String, u64)>, StorageError> {
        for year in [self.current_year, self.current_year.saturating_sub(1)] {
            let name = sun_filename(year);
            debug!(file = %name, "looking for data file");
            if let Some(size) = self.backend.exists(&name)? {
                debug!(file = %name, size, "reading data file");
                return Ok(Some((name, size)));
            }
        }
        debug!("no data file found");
        Ok(None)
    }

    /// Opens a reverse reader over the tail of the newest data file.
    ///
    /// # Errors
    ///
    /// [`StorageError::NoData`] if there is no file to read, otherwise any
    /// open, seek or read failure of the chosen file.
    pub fn entry_reader(&self) -> Result<ReverseReader<B::Reader>, StorageError> {
        let (name, size) = self.data_file()?.ok_or(StorageError::NoData)?;
        let mut reader = self.backend.open_reader(&name)?;

        if size > self.tail_bytes {
            let offset = size - self.tail_bytes;
            debug!(
                file = %name,
                size,
                tail_bytes = self.tail_bytes,
                offset,
                "data file larger than tail, seeking"
            );
            reader
                .seek(SeekFrom::Start(offset))
                .map_err(|e| StorageError::io("seek in", &name, e))?;
        }

        ReverseReader::new(reader).map_err(|e| StorageError::log(&name, e))
    }

    /// Appends `entry` to this year's file, creating it if needed.
    pub fn write(&self, entry: &Entry) -> Result<(), StorageError> {
        let name = sun_filename(self.current_year);
        let mut writer = self.backend.open_writer(&name)?;
        let len = writer
            .append(entry)
            .map_err(|e| StorageError::log(&name, e))?;
        debug!(file = %name, frame_bytes = len, "appended entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
