//! # Config - runtime settings for `sun`
//!
//! All settings come from environment variables, read once at start-up and
//! passed explicitly to the storage layer. Nothing else in the workspace
//! looks at the environment.
//!
//! ```text
//! SUN_DATA_DIR   directory holding the yearly log files  (default: "$HOME/.sun.d")
//! SUN_TAIL_KB    bytes of a log file loaded for reading  (default: 16 KiB)
//! SUN_DEBUG      any value enables verbose logging       (default: unset)
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub const DATA_DIR_ENV: &str = "SUN_DATA_DIR";
pub const TAIL_KB_ENV: &str = "SUN_TAIL_KB";
pub const DEBUG_ENV: &str = "SUN_DEBUG";

/// Name of the data directory created under the home directory.
pub const DATA_DIR_NAME: &str = ".sun.d";

/// Default tail size in KiB.
pub const DEFAULT_TAIL_KB: u64 = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unable to locate home directory; set SUN_DATA_DIR")]
    NoHomeDir,

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the `<year>.sun` files.
    pub data_dir: PathBuf,
    /// Upper bound on the bytes loaded from the end of a log file.
    pub tail_bytes: u64,
    /// Verbose (debug) logging.
    pub verbose: bool,
}

impl Config {
    /// Default settings rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            tail_bytes: DEFAULT_TAIL_KB * 1024,
            verbose: false,
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] if `SUN_TAIL_KB` is not a positive
    /// integer, [`ConfigError::NoHomeDir`] if no data directory is given and
    /// the home directory cannot be determined.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .ok_or(ConfigError::NoHomeDir)?
                .join(DATA_DIR_NAME),
        };

        let tail_kb = match lookup(TAIL_KB_ENV) {
            Some(v) => match v.trim().parse::<u64>() {
                Ok(kb) if kb > 0 => kb,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: TAIL_KB_ENV,
                        value: v,
                    })
                }
            },
            None => DEFAULT_TAIL_KB,
        };

        Ok(Self {
            data_dir,
            tail_bytes: tail_kb.saturating_mul(1024),
            verbose: lookup(DEBUG_ENV).is_some(),
        })
    }
}

#[cfg(test)]
mod tests;
