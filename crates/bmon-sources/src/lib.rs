//! bmon-sources — raw log text sources for bmon.
//!
//! Each source supplies the unparsed text of one log: [`file::FileSource`]
//! streams a local file line by line with bounded memory, and
//! [`command::CommandSource`] captures the whole standard output of an
//! external command. Neither knows anything about log grammars; they hand
//! text to `bmon-core` and nothing else.
//!
//! Failures here are fatal for a run: there is no retry, timeout, or
//! partial-result salvage. A transient failure of an external process is
//! indistinguishable from a permanent one, so both surface as
//! [`SourceError`].

pub mod command;
pub mod file;

use std::path::PathBuf;
use std::process::ExitStatus;

/// Why a raw text source could not supply its text.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The backing file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external command could not be started at all.
    #[error("cannot run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The external command ran but exited with a failure status.
    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}
