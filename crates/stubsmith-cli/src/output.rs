//! Output management and formatting.
//!
//! [`OutputManager`] is also the [`Reporter`] handed to the generators, so
//! every line a command produces goes through the same quiet/colour rules.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;
use serde_json::json;

use stubsmith_core::{
    application::{GenerationOutcome, Outcome, ports::Reporter},
    domain::ArtifactKind,
};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
#[derive(Clone)]
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    ///
    /// Goes to stderr in JSON mode so stdout stays parseable.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        if self.is_json() {
            self.err_term.write_line(&line)
        } else {
            self.term.write_line(&line)
        }
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Print the JSON summary of a generation run; no-op outside JSON mode.
    pub fn summary(&self, outcome: &GenerationOutcome) -> io::Result<()> {
        if !self.is_json() {
            return Ok(());
        }
        let files: Vec<_> = outcome
            .iter()
            .map(|o| {
                json!({
                    "status": outcome_status(o),
                    "path": o.path().display().to_string(),
                })
            })
            .collect();
        let doc = json!({ "files": files });
        self.term.write_line(&doc.to_string())
    }

    /// `true` when stdout is reserved for the JSON summary.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

fn outcome_status(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Created(_) => "created",
        Outcome::Overwritten(_) => "overwritten",
        Outcome::Skipped(_) => "skipped",
        Outcome::Appended(_) => "appended",
        Outcome::DryRun(_) => "dry-run",
    }
}

impl Reporter for OutputManager {
    fn created(&self, kind: ArtifactKind, path: &Path) {
        if self.is_json() {
            return;
        }
        if let Err(e) = self.success(&format!("{kind} created: {}", path.display())) {
            tracing::debug!(error = %e, "Failed to write report line");
        }
    }

    fn skipped(&self, message: &str) {
        if let Err(e) = self.warning(message) {
            tracing::debug!(error = %e, "Failed to write report line");
        }
    }

    fn warn(&self, message: &str) {
        if let Err(e) = self.warning(message) {
            tracing::debug!(error = %e, "Failed to write report line");
        }
    }

    fn info(&self, message: &str) {
        if self.is_json() {
            return;
        }
        if let Err(e) = OutputManager::info(self, message) {
            tracing::debug!(error = %e, "Failed to write report line");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
