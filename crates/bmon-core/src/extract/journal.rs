//! Journal extractor (`journalctl` output for the postfix unit).
//!
//! Same marker/recipient/reason grammar as the flat mail log, but the
//! timestamp is a fully-specified `YYYY-MM-DD HH:MM:SS` anchored at line
//! start — no year resolution involved. Issuing the journal query is the
//! source collaborator's job; this module is a pure parse over already
//! retrieved text.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::types::BounceRecord;

static BOUNCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\d-]+ [\d:]+).*postfix.*to=<([^>]+)>.*status=bounced.*\((.+?)\)")
        .expect("journal bounce pattern must compile")
});

/// Extract every bounce record from `text`. Output order is source order.
pub fn extract(text: &str) -> Vec<BounceRecord> {
    text.lines().filter_map(extract_line).collect()
}

/// Match a single line against the grammar. Returns `None` for a line
/// that does not match or whose date substring does not parse.
pub fn extract_line(line: &str) -> Option<BounceRecord> {
    let caps = BOUNCE_RE.captures(line)?;

    let date_str = &caps[1];
    let Some(ts) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S").ok() else {
        tracing::debug!(date = date_str, "skipping line with unparseable journal date");
        return None;
    };

    Some(BounceRecord {
        queue_id: None,
        ts,
        recipient: caps[2].to_string(),
        reason: caps[3].to_string(),
    })
}
