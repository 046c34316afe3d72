//! Reporter that keeps every event in memory.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use stubsmith_core::{application::ports::Reporter, domain::ArtifactKind};

/// One reported line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Created(ArtifactKind, PathBuf),
    Skipped(String),
    Warn(String),
    Info(String),
}

/// Records events in order. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Paths of every `Created` event.
    pub fn created_paths(&self) -> Vec<PathBuf> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Created(_, path) => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn skip_messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Skipped(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Warn(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Event) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Reporter for RecordingReporter {
    fn created(&self, kind: ArtifactKind, path: &Path) {
        self.record(Event::Created(kind, path.to_path_buf()));
    }

    fn skipped(&self, message: &str) {
        self.record(Event::Skipped(message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.record(Event::Warn(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.record(Event::Info(message.to_string()));
    }
}
