//! # sun - a personal note log
//!
//! Each invocation either appends one timestamped note to this year's log
//! file or shows the notes of the last two days.
//!
//! ```text
//! $ sun fixed the flaky upload test @work @ci
//! $ sun
//! | Tue | 2024-03-05 | 17:02:11 | ci work | fixed the flaky upload test |
//! ```
//!
//! ## Configuration
//!
//! ```text
//! SUN_DATA_DIR  directory holding the yearly files  (default: ~/.sun.d)
//! SUN_TAIL_KB   KiB read from the end of a file    (default: 16)
//! SUN_DEBUG     any value turns on debug logging
//! SUN_LOG       tracing filter, overrides SUN_DEBUG
//! ```

mod app;
mod args;
mod output;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Parser;
use config::Config;
use storage::{FsBackend, Storage};
use tracing::{debug, error};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::App;
use crate::args::Cli;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("SUN_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "sun=debug,storage=debug,info"
        } else {
            "warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let now = Local::now().fixed_offset();
    let action = cli.action();
    debug!(?action, data_dir = %config.data_dir.display(), "starting");

    let backend = FsBackend::new(&config)?;
    let storage = Storage::new(backend, &config, now.year());
    App::new(storage, io::stdout().lock(), now).run(action)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(config.as_ref().is_ok_and(|c| c.verbose));

    match config.map_err(anyhow::Error::from).and_then(|c| run(cli, c)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
