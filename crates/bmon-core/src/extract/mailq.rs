//! Mail-queue extractor (`postqueue -p` listing).
//!
//! Unlike the line-oriented grammars, a queue entry spans two physical
//! lines: the header carries the queue id, a `Ddd Mon D HH:MM:SS`
//! timestamp, and the recipient; the immediately following line carries
//! the parenthesized bounce reason:
//!
//! ```text
//! A1B2C3*  Mon Jan  6 09:00:00  z@w.net
//!          (Recipient address rejected)
//! ```
//!
//! The compiled pattern spans the line break, so a header with no
//! following reason line produces no record at all — never a partial one.
//! A trailing `*` on the queue id marks an active queue entry and is
//! excluded from the captured id.
//!
//! # Date fallback
//!
//! If the captured date substring does not parse, the record is kept and
//! its timestamp set to the current wall-clock time instead of dropping
//! the whole entry. The substituted value says nothing about when the
//! bounce happened; consumers must treat it as a data-quality signal.

use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDateTime};
use regex::Regex;

use crate::types::BounceRecord;

static QUEUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)\*?\s+(\w{3}\s+\w{3}\s+\d+\s+[\d:]+)\s+(\S+).*\n\s*\((.+?)\)")
        .expect("mailq queue pattern must compile")
});

/// Extract every queue entry from `text`, resolving yearless dates against
/// the current local year and using the current wall-clock time for the
/// date fallback.
pub fn extract(text: &str) -> Vec<BounceRecord> {
    extract_at(text, Local::now().naive_local())
}

/// Extract with an explicit notion of "now": `now.year()` is the reference
/// year for yearless dates and `now` itself is the fallback timestamp for
/// dates that fail to parse. Output order is source order.
pub fn extract_at(text: &str, now: NaiveDateTime) -> Vec<BounceRecord> {
    QUEUE_RE
        .captures_iter(text)
        .map(|caps| {
            let date_str = &caps[2];
            let ts = parse_queue_date(date_str, now.year()).unwrap_or_else(|| {
                tracing::warn!(
                    date = date_str,
                    "unparseable queue date, substituting extraction time"
                );
                now
            });
            BounceRecord {
                queue_id: Some(caps[1].to_string()),
                ts,
                recipient: caps[3].to_string(),
                reason: caps[4].to_string(),
            }
        })
        .collect()
}

/// Parse a yearless `Ddd Mon D HH:MM:SS` date. The weekday token is
/// presentational and is not cross-validated against the resolved date
/// (strptime semantics).
fn parse_queue_date(s: &str, reference_year: i32) -> Option<NaiveDateTime> {
    let (_weekday, rest) = s.split_once(char::is_whitespace)?;
    NaiveDateTime::parse_from_str(
        &format!("{reference_year} {}", rest.trim_start()),
        "%Y %b %d %H:%M:%S",
    )
    .ok()
}
