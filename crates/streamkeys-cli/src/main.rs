//! `streamkeys`: translate Android key codes into streaming-host key codes.
//!
//! # Usage
//!
//! ```text
//! streamkeys [OPTIONS] [KEY]...
//!
//! Arguments:
//!   [KEY]...  Android key codes (decimal) or names such as KEYCODE_ENTER.
//!             Read from stdin, one per line, when omitted.
//!
//! Options:
//!   --config <PATH>       TOML config file
//!   --format <FORMAT>     text | json
//!   --log-level <LEVEL>   tracing filter used when RUST_LOG is unset
//! ```
//!
//! # Precedence
//!
//! Command-line flag, then environment variable (`STREAMKEYS_FORMAT`,
//! `STREAMKEYS_LOG`), then config file, then built-in default.  `RUST_LOG`,
//! when set, overrides every log level setting.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use streamkeys_cli::config::{AppConfig, OutputFormat};
use streamkeys_cli::{translate_args, translate_lines};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Translate Android key codes into streaming-host virtual-key codes.
#[derive(Debug, Parser)]
#[command(name = "streamkeys", version)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, env = "STREAMKEYS_CONFIG")]
    config: Option<PathBuf>,

    /// Output format; overrides `[output] format` from the config file.
    #[arg(long, value_enum, env = "STREAMKEYS_FORMAT")]
    format: Option<OutputFormat>,

    /// Log filter used when `RUST_LOG` is unset; overrides `[logging] level`.
    #[arg(long, env = "STREAMKEYS_LOG")]
    log_level: Option<String>,

    /// Android key codes or key names.  Negative numbers are accepted.
    #[arg(allow_negative_numbers = true)]
    keys: Vec<String>,
}

/// Settings after merging CLI flags over the config file.
#[derive(Debug, PartialEq)]
struct Settings {
    format: OutputFormat,
    log_level: String,
}

impl Cli {
    /// Loads the config file (if any) and applies CLI overrides on top.
    ///
    /// # Errors
    ///
    /// Returns an error if `--config` names a file that cannot be read or
    /// parsed.
    fn resolve_settings(&self) -> anyhow::Result<Settings> {
        let config = match &self.config {
            Some(path) => AppConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => AppConfig::default(),
        };
        Ok(Settings {
            format: self.format.unwrap_or(config.output.format),
            log_level: self.log_level.clone().unwrap_or(config.logging.level),
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.resolve_settings()?;

    // Logs go to stderr so stdout carries only translation output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    debug!(format = ?settings.format, keys = cli.keys.len(), "streamkeys starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.keys.is_empty() {
        translate_lines(io::stdin().lock(), settings.format, &mut out)?;
    } else {
        translate_args(&cli.keys, settings.format, &mut out)?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
