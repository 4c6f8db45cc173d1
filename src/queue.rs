//! Filesystem queue writer
//!
//! One file per command, `cmd_<millis>.json`, written in a single call. The
//! directory is the whole handoff protocol: this side only ever writes, the
//! agent worker polls, consumes and deletes.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::QueuedCommand;

/// Queue write errors
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("Failed to create queue directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write queue file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes queued command records into the queue directory
pub struct QueueWriter {
    dir: PathBuf,
}

impl QueueWriter {
    /// Open the queue at `dir`, creating the directory tree if absent
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, QueueError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| QueueError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The queue directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one record to the queue, fire-and-forget.
    ///
    /// An I/O failure is logged and swallowed: the player gets no failure
    /// notification and the record is simply lost. Returns the written path
    /// for callers that do want to know.
    pub fn enqueue(&self, record: &QueuedCommand) -> Option<PathBuf> {
        match self.write_record(record) {
            Ok(path) => {
                tracing::info!("Queued command: /{} from {}", record.command, record.player);
                Some(path)
            }
            Err(e) => {
                tracing::error!("Failed to write command to queue: {e}");
                None
            }
        }
    }

    /// Write one record, reporting the path on success.
    ///
    /// Records sharing a millisecond share a file name; the last write wins
    /// silently. Accepted gap in the queue format.
    fn write_record(&self, record: &QueuedCommand) -> Result<PathBuf, QueueError> {
        let path = self.dir.join(record.file_name());
        fs::write(&path, record.to_json_line()).map_err(|source| QueueError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
