// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Daily log file implementation.

use crate::block::RunBlock;
use crate::entry::header_line;
use crate::LOG_EXTENSION;
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors writing to the daily log
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Create `dir` and all of its parents. Succeeds if it already exists.
pub fn ensure_directory(dir: &Path) -> Result<(), SinkError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| SinkError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(dir = %dir.display(), "created log directory");
    Ok(())
}

/// Append-only handle on one day's log file.
///
/// Every write opens the file in append mode and issues a single
/// `write_all`, so separate processes appending to the same day never
/// overwrite each other. Writes through clones of one `DailyLog` are
/// serialized.
pub struct DailyLog {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl DailyLog {
    /// Log file for `date_key` inside `dir`, e.g. `logs/2024-03-07.txt`
    pub fn for_date(dir: &Path, date_key: &str) -> Self {
        Self::at(dir.join(format!("{}.{}", date_key, LOG_EXTENSION)))
    }

    /// Log file at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory holding the log file
    pub fn ensure_directory(&self) -> Result<(), SinkError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => ensure_directory(dir),
            _ => Ok(()),
        }
    }

    /// Write the date banner if the file does not exist yet.
    ///
    /// Returns `true` when this call wrote the banner. An existing file is
    /// left untouched, even an empty one: with create-new semantics, of two
    /// concurrent first runs only one writes the banner.
    pub fn ensure_header(&self, date_key: &str) -> Result<bool, SinkError> {
        let _guard = self.write_lock.lock();
        let banner = format!("{}\n", header_line(date_key));

        match OpenOptions::new()
            .append(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(mut file) => {
                self.write_to(&mut file, banner.as_bytes())?;
                tracing::debug!(path = %self.path.display(), "started daily log");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(source) => Err(self.open_error(source)),
        }
    }

    /// Append one line, creating the file if absent
    pub fn append(&self, line: &str) -> Result<(), SinkError> {
        let mut data = Vec::with_capacity(line.len() + 1);
        data.extend_from_slice(line.as_bytes());
        data.push(b'\n');
        self.append_bytes(&data)
    }

    /// Append a raw byte block in one write
    pub fn append_bytes(&self, bytes: &[u8]) -> Result<(), SinkError> {
        let _guard = self.write_lock.lock();
        let mut file = self.open_locked()?;
        self.write_to(&mut file, bytes)
    }

    /// Append a whole run block in one write
    pub fn append_block(&self, block: &RunBlock) -> Result<(), SinkError> {
        if block.is_empty() {
            return Ok(());
        }
        self.append_bytes(block.as_bytes())
    }

    /// Open an append-mode handle for a child process to write into.
    pub fn open_append(&self) -> Result<File, SinkError> {
        let _guard = self.write_lock.lock();
        self.open_locked()
    }

    /// Append a newline if the file currently ends mid-line.
    ///
    /// Used after output was written straight into the file by someone else.
    pub fn terminate_line(&self) -> Result<(), SinkError> {
        use std::io::{Read, Seek, SeekFrom};

        let _guard = self.write_lock.lock();
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(source) => return Err(self.open_error(source)),
        };
        let len = file
            .metadata()
            .map_err(|source| self.open_error(source))?
            .len();
        if len == 0 {
            return Ok(());
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))
            .and_then(|_| file.read_exact(&mut last))
            .map_err(|source| self.open_error(source))?;
        if last[0] == b'\n' {
            return Ok(());
        }

        let mut file = self.open_locked()?;
        self.write_to(&mut file, b"\n")
    }

    fn open_locked(&self) -> Result<File, SinkError> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.open_error(source))
    }

    fn write_to(&self, file: &mut File, bytes: &[u8]) -> Result<(), SinkError> {
        file.write_all(bytes).map_err(|source| SinkError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn open_error(&self, source: io::Error) -> SinkError {
        SinkError::Open {
            path: self.path.clone(),
            source,
        }
    }
}

impl Clone for DailyLog {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
