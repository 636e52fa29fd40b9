use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use bmon_core::{report, stats};
use bmon_sources::command::CommandSource;

#[derive(Parser)]
#[command(name = "bmon-stats", about = "Per-user maildir statistics")]
struct Cli {
    /// Base directory holding `<domain>/<user>/` maildirs.
    path: PathBuf,

    /// Write debug logs to stderr (RUST_LOG controls the filter).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    anyhow::ensure!(
        cli.path.is_dir(),
        "{} is not a directory",
        cli.path.display()
    );

    let stats = stats::scan_domains(&cli.path, disk_usage)
        .with_context(|| format!("scanning {}", cli.path.display()))?;

    tracing::debug!(mailboxes = stats.len(), "scan complete");
    let mut stdout = std::io::stdout().lock();
    report::render_stats(&stats, &mut stdout)?;
    Ok(())
}

/// Human-readable usage of one mailbox via `du -sh`, first whitespace
/// token of the output. Any failure degrades to `0B` rather than
/// aborting the whole scan.
fn disk_usage(path: &Path) -> String {
    let du = CommandSource::new("du", [String::from("-sh"), path.display().to_string()]);
    match du.capture() {
        Ok(out) => out
            .split_whitespace()
            .next()
            .unwrap_or("0B")
            .to_string(),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "du failed");
            "0B".to_string()
        }
    }
}
