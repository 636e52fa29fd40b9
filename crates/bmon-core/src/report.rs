//! Report rendering — formats a record sequence as a console table.
//!
//! No parsing logic lives here. Rendering targets any [`std::io::Write`]
//! so harnesses can assert on the produced text without capturing stdout.

use std::io::Write;

use crate::stats::UserStats;
use crate::types::BounceRecord;

/// Fixed table width, matching the four-column layout below.
const TABLE_WIDTH: usize = 100;

/// Width of the maildir statistics table.
const STATS_WIDTH: usize = 110;

/// Render `records` as the bounced-email table plus a trailing total.
///
/// Timestamps are formatted with `timestamp_format` (a chrono `strftime`
/// string, `%Y-%m-%d %H:%M` by default from config). An empty sequence
/// renders the explicit no-results message instead of an empty table.
pub fn render(
    records: &[BounceRecord],
    timestamp_format: &str,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    if records.is_empty() {
        return writeln!(w, "✅ No bounced emails found!");
    }

    writeln!(w)?;
    writeln!(w, "{:^TABLE_WIDTH$}", "📧 Postfix Bounced Email Monitor 📧")?;
    writeln!(w, "{}", "=".repeat(TABLE_WIDTH))?;
    writeln!(
        w,
        "{:<15} | {:<20} | {:<35} | {}",
        "Message ID", "Date & Time", "Recipient", "Reason"
    )?;
    writeln!(w, "{}", "-".repeat(TABLE_WIDTH))?;

    for rec in records {
        writeln!(
            w,
            "🚫 {:<12} | {:<17} | {:<35} | {}",
            rec.queue_id.as_deref().unwrap_or("-"),
            rec.ts.format(timestamp_format).to_string(),
            rec.recipient,
            rec.reason
        )?;
    }

    writeln!(w, "{}", "=".repeat(TABLE_WIDTH))?;
    writeln!(w, "Total Bounced Emails: {}", records.len())
}

/// Render per-user maildir statistics as a console table.
///
/// One row per mailbox, with folder counts and the disk usage string as
/// scanned. Unlike [`render`], an empty scan still prints the table shell
/// so the zero-mailbox case is visible at a glance.
pub fn render_stats(stats: &[UserStats], w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{:^STATS_WIDTH$}", "📊 Mail Server Statistics 📊")?;
    writeln!(w, "{}", "=".repeat(STATS_WIDTH))?;
    writeln!(
        w,
        "{:<30} | {:<12} | {:>8} | {:>8} | {:>8} | {:>8} | {:>8}",
        "👤 User", "💾 Disk Usage", "📬 Inbox", "📤 Sent", "📝 Drafts", "🗑️ Trash", "📁 Junk"
    )?;
    writeln!(w, "{}", "-".repeat(STATS_WIDTH))?;

    for user in stats {
        writeln!(
            w,
            "{:<30} | {:<12} | {:>8} | {:>8} | {:>8} | {:>8} | {:>8}",
            user.address,
            user.disk_usage,
            user.counts.inbox(),
            user.counts.sent,
            user.counts.drafts,
            user.counts.trash,
            user.counts.junk
        )?;
    }

    writeln!(w, "{}", "=".repeat(STATS_WIDTH))?;
    writeln!(w, "Total Mailboxes: {}", stats.len())
}
