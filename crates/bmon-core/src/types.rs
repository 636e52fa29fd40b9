//! Core types for bmon-core.
//!
//! This module defines the fundamental data structures shared across the
//! extraction and report layers: the unified [`BounceRecord`] and the
//! [`LogFormat`] discriminant selecting which grammar a run parses.

use chrono::NaiveDateTime;

/// A single bounced-email event, unified across all three log formats.
///
/// A record is created the instant its source line (or two-line unit, for
/// the mail queue) matches the format's grammar, and is never mutated
/// afterwards. `recipient` and `reason` are the exact delimited substrings
/// from the source text and are non-empty for every produced record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BounceRecord {
    /// Queue-entry identifier. Only the mail-queue listing carries one; the
    /// trailing `*` active-queue marker is not part of the captured text.
    pub queue_id: Option<String>,
    /// Resolved event timestamp. The log sources carry no timezone, so this
    /// is a naive local timestamp. For the yearless rsyslog and mailq
    /// grammars the year comes from the extractor's reference year.
    pub ts: NaiveDateTime,
    /// Recipient address as captured between `<` and `>`. Pass-through:
    /// not validated as a well-formed address.
    pub recipient: String,
    /// Free-text bounce reason as captured inside the parentheses.
    pub reason: String,
}

/// Which log source grammar a run extracts from.
///
/// Exactly one format is selected per invocation; there is no merging
/// across formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogFormat {
    /// Flat syslog-style mail log, one event per line, yearless timestamps.
    Rsyslog,
    /// `journalctl` output for the postfix unit, full ISO-like timestamps.
    Journal,
    /// `postqueue -p` listing, two-line units, yearless timestamps.
    Mailq,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Rsyslog => write!(f, "rsyslog"),
            LogFormat::Journal => write!(f, "journal"),
            LogFormat::Mailq => write!(f, "mailq"),
        }
    }
}
