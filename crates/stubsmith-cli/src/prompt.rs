//! Overwrite confirmation on the terminal.

use std::io::{self, BufRead, Write};
#[cfg(feature = "interactive")]
use std::io::IsTerminal;

use stubsmith_core::{
    application::{ApplicationError, ports::Prompt},
    error::StubsmithResult,
};

/// Asks yes/no questions on stdin.
///
/// With `--no-interaction` every question is answered "no", so existing
/// files are kept.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompt {
    no_interaction: bool,
}

impl TerminalPrompt {
    pub fn new(no_interaction: bool) -> Self {
        Self { no_interaction }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, question: &str) -> StubsmithResult<bool> {
        if self.no_interaction {
            tracing::debug!(question, "Non-interactive, answering no");
            return Ok(false);
        }

        #[cfg(feature = "interactive")]
        {
            if io::stdin().is_terminal() && io::stderr().is_terminal() {
                return dialoguer::Confirm::new()
                    .with_prompt(question)
                    .interact()
                    .map_err(|e| {
                        ApplicationError::PromptFailed {
                            reason: e.to_string(),
                        }
                        .into()
                    });
            }
        }

        let stdin = io::stdin();
        read_answer(question, &mut stdin.lock(), &mut io::stderr())
    }
}

/// Line-based fallback used when stdin is piped.
///
/// Only an explicit yes or no ends the loop; a blank line asks again.
fn read_answer(
    question: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> StubsmithResult<bool> {
    let failed = |e: io::Error| ApplicationError::PromptFailed {
        reason: e.to_string(),
    };

    loop {
        write!(out, "{question} (yes/no): ").map_err(failed)?;
        out.flush().map_err(failed)?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(failed)? == 0 {
            return Err(ApplicationError::PromptFailed {
                reason: "no answer on standard input".into(),
            }
            .into());
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(out, "Please answer yes or no.").map_err(failed)?,
        }
    }
}
