//! Extraction layer — turns raw log text into [`BounceRecord`] sequences.
//!
//! One submodule per known grammar: [`rsyslog`] (flat mail log),
//! [`journal`] (`journalctl` output), and [`mailq`] (`postqueue -p`
//! listing). Each submodule owns exactly one compiled pattern and one
//! timestamp-resolution rule; everything else about record assembly is
//! shared through [`BounceRecord`].
//!
//! The patterns are process-wide `LazyLock` constants: compiled once on
//! first use, read-only afterwards, safe to share.
//!
//! # Skipping vs. fallback
//!
//! A line (or two-line unit) that does not satisfy its grammar is skipped
//! silently — that is normal log traffic, not an error. The single
//! field-level recovery is the mailq date fallback, documented in
//! [`mailq`].

pub mod journal;
pub mod mailq;
pub mod rsyslog;

use crate::types::{BounceRecord, LogFormat};

impl LogFormat {
    /// Extract every bounce record from `text` under this format's grammar.
    ///
    /// Yearless timestamps (rsyslog, mailq) resolve against the current
    /// local year; the mailq date fallback uses the current wall-clock
    /// time. For deterministic output, call the format module's
    /// `extract_with_year` / `extract_at` directly.
    pub fn extract(self, text: &str) -> Vec<BounceRecord> {
        match self {
            LogFormat::Rsyslog => rsyslog::extract(text),
            LogFormat::Journal => journal::extract(text),
            LogFormat::Mailq => mailq::extract(text),
        }
    }
}
