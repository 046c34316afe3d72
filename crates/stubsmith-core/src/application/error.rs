//! Application layer errors.
//!
//! These errors describe failures while orchestrating a generation run
//! (missing collaborators, I/O failures), not malformed input. Input errors
//! are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ArtifactKind;
use crate::error::ErrorCategory;

/// Errors that occur while generating files.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The named stub is not in any stub store.
    #[error("Stub not found: {name}")]
    StubNotFound { name: String },

    /// A referenced artifact (model, repository, ...) does not exist.
    #[error("The specified {} \"{name}\" does not exist.", .kind.label().to_lowercase())]
    MissingDependency { kind: ArtifactKind, name: String },

    #[error("The specified module \"{module}\" does not exist.")]
    ModuleNotFound { module: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The confirmation prompt could not be answered (closed stdin, ...).
    #[error("Could not read an answer: {reason}")]
    PromptFailed { reason: String },

    /// Shared state of an adapter was poisoned by a panicking thread.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StubNotFound { name } => vec![
                format!("No stub named '{}' was found", name),
                "Run `stubsmith stubs` to list available stubs".into(),
                "Check the `stubs_dir` setting if you override stubs".into(),
            ],
            Self::MissingDependency { kind, name } => match kind {
                ArtifactKind::Repository => vec![
                    format!("Create it first: stubsmith repository-make {}", name),
                    "Or pass -r to create it together with the controller".into(),
                ],
                ArtifactKind::Model => vec![
                    format!("Create the model '{}' before generating code for it", name),
                    "Or run crud-make to generate the model and its companions".into(),
                ],
                _ => vec![format!("Create the {} '{}' first", kind.label(), name)],
            },
            Self::ModuleNotFound { module } => vec![
                format!("Expected a directory Modules/{}", module),
                "Check the spelling of --module".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Pass --force to overwrite without asking".into(),
                "Or -n / --no-interaction to keep existing files".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingDependency { .. } | Self::ModuleNotFound { .. } => ErrorCategory::NotFound,
            Self::StubNotFound { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } | Self::PromptFailed { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_message() {
        let err = ApplicationError::MissingDependency {
            kind: ArtifactKind::Model,
            name: "Post".into(),
        };
        assert_eq!(err.to_string(), "The specified model \"Post\" does not exist.");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn missing_repository_suggests_flag() {
        let err = ApplicationError::MissingDependency {
            kind: ArtifactKind::Repository,
            name: "PostRepository".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("-r")));
    }
}
