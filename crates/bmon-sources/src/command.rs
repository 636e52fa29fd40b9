//! Command-backed raw text source.
//!
//! Runs an external command (`journalctl`, `postqueue`) and buffers its
//! whole standard output before parsing begins. Acceptable because the
//! expected inputs are operator-scale log excerpts, not continuous
//! streams. Output bytes are converted UTF-8-lossy; log text is not
//! guaranteed clean.

use std::process::Command;

use crate::SourceError;

/// An external command whose captured stdout is the raw log text.
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    /// Describe a command invocation without running it.
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run the command and return its captured stdout.
    ///
    /// A spawn failure or non-zero exit status is fatal; the error carries
    /// the captured stderr for diagnostics. Blocks until the process
    /// exits — no timeout is applied, a hang propagates as a hang.
    pub fn capture(&self) -> Result<String, SourceError> {
        let rendered = self.rendered();
        tracing::debug!(command = %rendered, "running source command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| SourceError::Spawn {
                command: rendered.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::Failed {
                command: rendered,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn rendered(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
