//! Non-interactive prompt adapters.
//!
//! The terminal prompt lives in the CLI; these answer from a script so
//! generators can be driven deterministically.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use stubsmith_core::{
    application::{ApplicationError, ports::Prompt},
    error::StubsmithResult,
};

/// Answers every question the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Prompt for FixedAnswer {
    fn confirm(&self, _question: &str) -> StubsmithResult<bool> {
        Ok(self.0)
    }
}

/// Pops queued answers in order and records every question asked.
///
/// Asking more questions than were queued fails with `PromptFailed`.
/// Clones share the queue and the record.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    inner: Arc<Mutex<Script>>,
}

#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<bool>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Script {
                answers: answers.into_iter().collect(),
                asked: Vec::new(),
            })),
        }
    }

    /// Questions asked so far, oldest first.
    pub fn asked(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|script| script.asked.clone())
            .unwrap_or_default()
    }

    pub fn remaining(&self) -> usize {
        self.inner
            .lock()
            .map(|script| script.answers.len())
            .unwrap_or_default()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, question: &str) -> StubsmithResult<bool> {
        let mut script = self.inner.lock().map_err(|_| ApplicationError::LockPoisoned)?;
        script.asked.push(question.to_string());
        script.answers.pop_front().ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: format!("no scripted answer left for: {question}"),
            }
            .into()
        })
    }
}
