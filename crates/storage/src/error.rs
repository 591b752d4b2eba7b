use std::io;
use std::path::PathBuf;

use notelog::LogError;
use thiserror::Error;

/// Errors returned by the storage layer. Every variant names the file or
/// directory involved.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Neither this year's nor last year's log file exists.
    #[error("no data in storage")]
    NoData,

    #[error("unable to create data directory {}", .path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not {op} data file {name}")]
    Io {
        op: &'static str,
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("error in data file {name}")]
    Log {
        name: String,
        #[source]
        source: LogError,
    },
}

impl StorageError {
    pub(crate) fn io(op: &'static str, name: &str, source: io::Error) -> Self {
        Self::Io {
            op,
            name: name.to_string(),
            source,
        }
    }

    pub(crate) fn log(name: &str, source: LogError) -> Self {
        Self::Log {
            name: name.to_string(),
            source,
        }
    }
}
