#![allow(unused)]
//! Report rendering harness.
//!
//! # What this covers
//!
//! - **Table shape**: banner, column header, one row per record, trailing
//!   total — verified over records extracted from a real corpus, not
//!   hand-built structs, so the extract → report seam is exercised.
//! - **Placeholder id**: formats without a queue id render `-`.
//! - **Empty result**: zero records renders the explicit no-results
//!   message and nothing else.
//!
//! # Running
//!
//! ```sh
//! cargo test --test report_harness
//! ```

mod common;
use common::*;

use bmon_core::extract::{mailq, rsyslog};
use bmon_core::report;
use pretty_assertions::assert_eq;

const TS_FORMAT: &str = "%Y-%m-%d %H:%M";

fn render_to_string(records: &[bmon_core::BounceRecord]) -> String {
    let mut buf = Vec::new();
    report::render(records, TS_FORMAT, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn rsyslog_records_render_with_placeholder_ids() {
    let recs = rsyslog::extract_with_year(CORPUS_RSYSLOG, FROZEN_YEAR);
    let out = render_to_string(&recs);

    assert!(out.contains("Message ID"));
    assert!(out.contains("alice@example.com"));
    assert!(out.contains("2024-01-05 10:22"));
    assert!(out.contains("Total Bounced Emails: 3"));
    // No format carries a queue id here, so every row shows the dash.
    assert_eq!(out.matches("🚫 -").count(), 3);
}

#[test]
fn mailq_records_render_their_queue_ids() {
    let recs = mailq::extract_at(MAILQ_LISTING, frozen_now());
    let out = render_to_string(&recs);

    assert!(out.contains("A1B2C3"));
    assert!(out.contains("D4E5F6"));
    assert!(!out.contains("🚫 -"));
    assert!(out.contains("Total Bounced Emails: 2"));
}

#[test]
fn empty_extraction_renders_no_results_message_only() {
    let recs = rsyslog::extract_with_year(CORPUS_NOISE, FROZEN_YEAR);
    assert!(recs.is_empty());

    let out = render_to_string(&recs);
    assert_eq!(out, "✅ No bounced emails found!\n");
}

#[test]
fn one_row_per_record() {
    let recs = mailq::extract_at(MAILQ_LISTING, frozen_now());
    let out = render_to_string(&recs);
    assert_eq!(out.matches('🚫').count(), recs.len());
}
