use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use notelog::Entry;
use storage::{Backend, Storage};
use tracing::debug;

use crate::args::Action;
use crate::output;

pub const NAME: &str = "sun";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit the binary was built from, if the build provided one.
pub fn commit() -> &'static str {
    option_env!("SUN_COMMIT_HASH").unwrap_or("unknown")
}

pub fn version_line() -> String {
    format!("{NAME} version: {VERSION} {}", commit())
}

/// One invocation: the storage to use, where to print, and the moment
/// the invocation started.
pub struct App<B: Backend, W: Write> {
    storage: Storage<B>,
    out: W,
    now: DateTime<FixedOffset>,
}

impl<B: Backend, W: Write> App<B, W> {
    pub fn new(storage: Storage<B>, out: W, now: DateTime<FixedOffset>) -> Self {
        Self { storage, out, now }
    }

    pub fn run(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Version => {
                writeln!(self.out, "{}", version_line())?;
                Ok(())
            }
            Action::Read => self.show_latest(),
            Action::Write { note, tags } => self.add_note(note, tags),
        }
    }

    fn show_latest(&mut self) -> Result<()> {
        let mut reader = self
            .storage
            .entry_reader()
            .context("could not open notes")?;

        let rendered = output::write_table(&mut self.out, reader.by_ref());
        let closed = reader.close().context("could not close notes");

        let rows = rendered?;
        closed?;
        debug!(rows, "rendered table");
        Ok(())
    }

    fn add_note(&mut self, note: String, tags: Vec<String>) -> Result<()> {
        debug!(tags = tags.len(), note_len = note.len(), "adding note");
        let entry = Entry::new(note, tags, self.now);
        self.storage.write(&entry).context("could not save note")?;
        Ok(())
    }
}
