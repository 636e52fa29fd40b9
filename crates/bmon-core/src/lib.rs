//! bmon-core — Postfix bounce monitor core library.
//!
//! This crate holds everything with algorithmic content: the unified
//! [`BounceRecord`] model, the three fixed-grammar extractors, the report
//! renderer, and configuration.
//!
//! # Architecture
//!
//! ```text
//! RawTextSource ──► extract::{rsyslog, journal, mailq} ──► [BounceRecord] ──► report
//! ```
//!
//! Raw text acquisition (files, external commands) lives in the
//! `bmon-sources` crate; this crate only ever sees already-retrieved text.
//! A run is strictly sequential and single-pass: one format, one source,
//! one extraction, one report.
//!
//! The [`stats`] module is a sibling feature: per-user maildir statistics
//! scanned from the filesystem and rendered through the same report seam.

pub mod config;
pub mod extract;
pub mod report;
pub mod stats;
pub mod types;

pub use types::{BounceRecord, LogFormat};
