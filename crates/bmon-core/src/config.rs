//! Configuration types for bmon.
//!
//! [`Config::load`] layers `~/.config/bmon/config.toml` (if present) over
//! the built-in defaults. It never writes: a run leaves no state behind,
//! and a missing file just means defaults. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[sources]
mail_log      = "/var/log/mail.log"
journal_unit  = "postfix@-.service"
mailq_command = "postqueue"

[report]
timestamp_format = "%Y-%m-%d %H:%M"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/bmon/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[sources]` section of `config.toml` — where each format's raw text
/// comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_mail_log")]
    pub mail_log: PathBuf,
    #[serde(default = "default_journal_unit")]
    pub journal_unit: String,
    #[serde(default = "default_mailq_command")]
    pub mailq_command: String,
}

fn default_mail_log() -> PathBuf { PathBuf::from("/var/log/mail.log") }
fn default_journal_unit() -> String { "postfix@-.service".to_string() }
fn default_mailq_command() -> String { "postqueue".to_string() }

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            mail_log: default_mail_log(),
            journal_unit: default_journal_unit(),
            mailq_command: default_mailq_command(),
        }
    }
}

/// `[report]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_timestamp_format() -> String { "%Y-%m-%d %H:%M".to_string() }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `~/.config/bmon/config.toml`, layered on top of the built-in
    /// defaults. Read-only: a missing file is not created, it just means
    /// defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("bmon")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
