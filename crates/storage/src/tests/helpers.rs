use chrono::{FixedOffset, TimeZone};
use notelog::{Entry, LogWriter};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

use crate::{Backend, StorageError};

type Files = Rc<RefCell<HashMap<String, Vec<u8>>>>;

/// In-memory backend that records which files were opened.
#[derive(Default)]
pub struct MemBackend {
    pub files: Files,
    pub opened: RefCell<Vec<String>>,
}

impl MemBackend {
    pub fn with_file(self, name: &str, bytes: Vec<u8>) -> Self {
        self.files.borrow_mut().insert(name.to_string(), bytes);
        self
    }

    pub fn contents(&self, name: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(name).cloned()
    }
}

pub struct MemFile {
    name: String,
    files: Files,
}

impl Write for MemFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.files
            .borrow_mut()
            .entry(self.name.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Backend for MemBackend {
    type Reader = Cursor<Vec<u8>>;
    type Writer = MemFile;

    fn exists(&self, name: &str) -> Result<Option<u64>, StorageError> {
        Ok(self.files.borrow().get(name).map(|f| f.len() as u64))
    }

    fn open_reader(&self, name: &str) -> Result<Self::Reader, StorageError> {
        self.opened.borrow_mut().push(name.to_string());
        match self.files.borrow().get(name) {
            Some(bytes) => Ok(Cursor::new(bytes.clone())),
            None => Err(StorageError::Io {
                op: "open",
                name: name.to_string(),
                source: io::ErrorKind::NotFound.into(),
            }),
        }
    }

    fn open_writer(&self, name: &str) -> Result<LogWriter<Self::Writer>, StorageError> {
        self.opened.borrow_mut().push(name.to_string());
        Ok(LogWriter::new(MemFile {
            name: name.to_string(),
            files: Rc::clone(&self.files),
        }))
    }
}

pub fn entry_at(note: &str, secs: i64) -> Entry {
    let created_at = FixedOffset::east_opt(0)
        .unwrap()
        .timestamp_opt(secs, 0)
        .unwrap();
    Entry::new(note, vec![], created_at)
}

pub fn log_of(entries: &[Entry]) -> Vec<u8> {
    let mut w = LogWriter::new(Vec::new());
    for e in entries {
        w.append(e).unwrap();
    }
    w.into_inner()
}
