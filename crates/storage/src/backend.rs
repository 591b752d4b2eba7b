//! Where log files live.
//!
//! [`Storage`](crate::Storage) only deals in file names such as `2024.sun`;
//! a [`Backend`] maps those names onto something readable and appendable.

use std::fs::{self, DirBuilder, File};
use std::io::{self, Read, Seek, Write};
use std::path::{Path, PathBuf};

use config::Config;
use notelog::LogWriter;
use tracing::debug;

use crate::StorageError;

/// File access used by [`Storage`](crate::Storage).
pub trait Backend {
    type Reader: Read + Seek;
    type Writer: Write;

    /// Size of `name` in bytes, or `None` if it does not exist.
    fn exists(&self, name: &str) -> Result<Option<u64>, StorageError>;

    /// Opens `name` for reading, positioned at its start.
    fn open_reader(&self, name: &str) -> Result<Self::Reader, StorageError>;

    /// Opens (or creates) `name` for appending.
    fn open_writer(&self, name: &str) -> Result<LogWriter<Self::Writer>, StorageError>;
}

/// Backend over a data directory on the local file system.
#[derive(Debug, Clone)]
pub struct FsBackend {
    data_dir: PathBuf,
}

impl FsBackend {
    /// Creates the configured data directory (owner-only on unix) if needed.
    pub fn new(config: &Config) -> Result<Self, StorageError> {
        ensure_data_dir(&config.data_dir)?;
        debug!(data_dir = %config.data_dir.display(), "using data directory");
        Ok(Self {
            data_dir: config.data_dir.clone(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn in_data_dir(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

impl Backend for FsBackend {
    type Reader = File;
    type Writer = File;

    fn exists(&self, name: &str) -> Result<Option<u64>, StorageError> {
        match fs::metadata(self.in_data_dir(name)) {
            Ok(meta) => {
                debug!(file = name, size = meta.len(), "data file exists");
                Ok(Some(meta.len()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(file = name, "data file does not exist");
                Ok(None)
            }
            Err(e) => Err(StorageError::io("stat", name, e)),
        }
    }

    fn open_reader(&self, name: &str) -> Result<File, StorageError> {
        File::open(self.in_data_dir(name)).map_err(|e| StorageError::io("open", name, e))
    }

    fn open_writer(&self, name: &str) -> Result<LogWriter<File>, StorageError> {
        LogWriter::open(self.in_data_dir(name)).map_err(|e| StorageError::log(name, e))
    }
}

fn ensure_data_dir(dir: &Path) -> Result<(), StorageError> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir).map_err(|source| StorageError::DataDir {
        path: dir.to_path_buf(),
        source,
    })
}
