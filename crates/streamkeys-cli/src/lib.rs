//! streamkeys-cli library crate.
//!
//! Holds everything the `streamkeys` binary does apart from argument parsing
//! and logger setup, so it can be tested without spawning a process.
//!
//! ```text
//! KEY args / stdin lines
//!         ↓  report::parse_key_arg
//!   Android key code
//!         ↓  streamkeys_core::KeyTranslator
//!   report::KeyReport  →  text or JSON line on stdout
//! ```

pub mod config;
pub mod report;

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{debug, info};

use config::OutputFormat;
use report::{parse_key_arg, KeyReport};

/// Totals for one run, logged at the end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub translated: usize,
    pub unmapped: usize,
}

impl RunSummary {
    fn record(&mut self, report: &KeyReport) {
        if report.mapped {
            self.translated += 1;
        } else {
            self.unmapped += 1;
        }
    }
}

/// Translates every key in `keys` and writes one line per key to `out`.
///
/// # Errors
///
/// Fails on the first key argument that cannot be parsed, or if writing to
/// `out` fails.  Unmapped key codes are not errors.
pub fn translate_args<W: Write>(
    keys: &[String],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<RunSummary> {
    let mut summary = RunSummary::default();
    for arg in keys {
        let keycode = parse_key_arg(arg).with_context(|| format!("invalid key argument '{arg}'"))?;
        emit(keycode, format, out, &mut summary)?;
    }
    info!(
        translated = summary.translated,
        unmapped = summary.unmapped,
        "translation finished"
    );
    Ok(summary)
}

/// Like [`translate_args`], but reads one key per line from `input`.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Fails on read errors, unparseable lines (reported with their line number),
/// or write errors.
pub fn translate_lines<R: BufRead, W: Write>(
    input: R,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<RunSummary> {
    let mut summary = RunSummary::default();
    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read key from input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let keycode = parse_key_arg(trimmed)
            .with_context(|| format!("invalid key on line {}: '{trimmed}'", index + 1))?;
        emit(keycode, format, out, &mut summary)?;
    }
    info!(
        translated = summary.translated,
        unmapped = summary.unmapped,
        "translation finished"
    );
    Ok(summary)
}

fn emit<W: Write>(
    keycode: i32,
    format: OutputFormat,
    out: &mut W,
    summary: &mut RunSummary,
) -> anyhow::Result<()> {
    let report = KeyReport::new(keycode);
    debug!(keycode, code = report.code, "translated key");
    summary.record(&report);
    let line = report.render(format).context("failed to render key report")?;
    writeln!(out, "{line}").context("failed to write output")?;
    Ok(())
}
