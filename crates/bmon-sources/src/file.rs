//! File-backed raw text source.
//!
//! Wraps a `BufReader` line iterator so callers can process
//! operator-scale logs without holding the whole file in memory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::SourceError;

/// A local log file opened for line-by-line reading.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    reader: BufReader<File>,
}

impl FileSource {
    /// Open `path` for reading. A missing or unreadable file is fatal for
    /// the run.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened log file");
        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    /// Iterate over the file's lines. An I/O error mid-stream aborts the
    /// iteration with a [`SourceError::Io`].
    pub fn lines(self) -> impl Iterator<Item = Result<String, SourceError>> {
        let path = self.path;
        self.reader
            .lines()
            .map(move |line| line.map_err(|source| SourceError::Io {
                path: path.clone(),
                source,
            }))
    }
}
