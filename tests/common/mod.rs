//! Shared test utilities for bmon integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top
//! of each harness file. Everything here is deterministic: corpora are
//! static and the frozen clock helpers never consult the real time.

pub mod fixtures;

pub use fixtures::*;

use chrono::{NaiveDate, NaiveDateTime};

/// A fixed "now" for mailq extraction: 2024-06-01 12:00:00.
///
/// `FROZEN_YEAR` is its year, used as the reference year wherever a
/// yearless grammar needs one.
pub const FROZEN_YEAR: i32 = 2024;

pub fn frozen_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(FROZEN_YEAR, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}
