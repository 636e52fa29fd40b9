//! Flat mail-log extractor (`/var/log/mail.log` style).
//!
//! One logical event per line. A matching line carries, in order: a
//! `Mon D HH:MM:SS` timestamp, the `postfix` marker, `to=<recipient>`,
//! `status=bounced`, and a parenthesized reason:
//!
//! ```text
//! Jan  5 10:22:31 mail postfix/smtp[4721]: 7B1F2: to=<a@b.com>,
//!     relay=..., status=bounced (connection refused)
//! ```
//!
//! The syslog timestamp has no year field. Yearless dates resolve against
//! a caller-supplied reference year, defaulting to the current local year
//! (DESIGN.md records the year-policy decision).

use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDateTime};
use regex::Regex;

use crate::types::BounceRecord;

static BOUNCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w{3}\s+\d+\s[\d:]+).*?postfix.*?to=<([^>]+)>.*?status=bounced.*?\((.+?)\)")
        .expect("rsyslog bounce pattern must compile")
});

/// Extract every bounce record from `text`, resolving yearless dates
/// against the current local year.
pub fn extract(text: &str) -> Vec<BounceRecord> {
    extract_with_year(text, Local::now().year())
}

/// Extract every bounce record from `text` with an explicit reference
/// year. Output order is source order.
pub fn extract_with_year(text: &str, reference_year: i32) -> Vec<BounceRecord> {
    text.lines()
        .filter_map(|line| extract_line(line, reference_year))
        .collect()
}

/// Match a single line against the grammar.
///
/// Returns `None` for a line that does not match, and also for a matched
/// line whose date substring does not parse — this grammar has no
/// fallback; a line either fully matches or is skipped.
pub fn extract_line(line: &str, reference_year: i32) -> Option<BounceRecord> {
    let caps = BOUNCE_RE.captures(line)?;

    let date_str = &caps[1];
    let Some(ts) = parse_syslog_date(date_str, reference_year) else {
        tracing::debug!(date = date_str, "skipping line with unparseable syslog date");
        return None;
    };

    Some(BounceRecord {
        queue_id: None,
        ts,
        recipient: caps[2].to_string(),
        reason: caps[3].to_string(),
    })
}

/// Parse a yearless `Mon D HH:MM:SS` date. Single-digit days may be padded
/// with extra spaces (`Jan  5`), which chrono's whitespace handling absorbs.
fn parse_syslog_date(s: &str, reference_year: i32) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{reference_year} {s}"), "%Y %b %d %H:%M:%S").ok()
}
