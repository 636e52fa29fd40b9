use anyhow::Context;
use chrono::{Datelike, Local};
use clap::{Parser, ValueEnum};

use bmon_core::config::Config;
use bmon_core::{extract, report, BounceRecord};
use bmon_sources::command::CommandSource;
use bmon_sources::file::FileSource;

#[derive(Parser)]
#[command(name = "bmon", about = "Postfix bounced-mail monitor")]
struct Cli {
    /// Log source to parse.
    #[arg(long, value_enum)]
    mode: Mode,

    /// Write debug logs to stderr (RUST_LOG controls the filter).
    #[arg(long)]
    debug: bool,
}

/// The `--mode` selector. Exactly one format per run.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Rsyslog,
    Journal,
    Mailq,
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

    let cfg = Config::load().context("loading configuration")?;
    let records = collect(cli.mode, &cfg)?;

    tracing::debug!(count = records.len(), mode = ?cli.mode, "extraction complete");
    let mut stdout = std::io::stdout().lock();
    report::render(&records, &cfg.report.timestamp_format, &mut stdout)?;
    Ok(())
}

/// Run the selected source and extractor. Source failures (unreadable
/// file, failed command) abort the run before any report is produced.
fn collect(mode: Mode, cfg: &Config) -> anyhow::Result<Vec<BounceRecord>> {
    match mode {
        Mode::Rsyslog => {
            // The flat log can be large; stream it line by line instead of
            // buffering the whole file.
            let reference_year = Local::now().year();
            let mut records = Vec::new();
            for line in FileSource::open(&cfg.sources.mail_log)?.lines() {
                if let Some(rec) = extract::rsyslog::extract_line(&line?, reference_year) {
                    records.push(rec);
                }
            }
            Ok(records)
        }
        Mode::Journal => {
            let text = CommandSource::new(
                "journalctl",
                [
                    "-u",
                    cfg.sources.journal_unit.as_str(),
                    "--no-pager",
                    "-o",
                    "short-iso",
                ],
            )
            .capture()?;
            Ok(extract::journal::extract(&text))
        }
        Mode::Mailq => {
            let text = CommandSource::new(cfg.sources.mailq_command.as_str(), ["-p"]).capture()?;
            Ok(extract::mailq::extract(&text))
        }
    }
}
