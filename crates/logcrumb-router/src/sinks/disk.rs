//! DiskSink - append-only log file
//!
//! The file and its parent directories are created on the first write that
//! finds them missing. Every write opens the file in append mode, writes
//! one whole line and closes it again; no handle is kept between calls.
//! An instance-wide lock keeps concurrent lines whole and in order.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use logcrumb_core::{
    domain::{FormattedLine, SinkError},
    ports::ILogSink,
};

/// Sink that appends every line to a single file.
pub struct DiskSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl DiskSink {
    /// Creates a sink targeting `path`. Nothing is touched on disk yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The log file this sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Makes sure the log file exists, creating parents as needed.
    fn ensure_file_exists(&self) -> Result<(), SinkError> {
        if self.path.exists() {
            return Ok(());
        }
        let create_err = |source| SinkError::Create {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(create_err)?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(create_err)?;
        Ok(())
    }

    /// Appends one line, UTF-8 encoded.
    fn append(&self, line: &FormattedLine) -> Result<(), SinkError> {
        self.ensure_file_exists()?;
        let append_err = |source| SinkError::Append {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(append_err)?;
        file.write_all(line.as_str().as_bytes()).map_err(append_err)?;
        Ok(())
    }
}

impl ILogSink for DiskSink {
    fn accept(&self, line: &FormattedLine) {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // Failures are dropped here; logging never fails the caller.
        let _ = self.append(line);
    }

    fn name(&self) -> &'static str {
        "disk"
    }
}
