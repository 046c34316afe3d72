//! Unified error handling for Stubsmith Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stubsmith Core operations.
#[derive(Debug, Error, Clone)]
pub enum StubsmithError {
    /// Invalid input (bad filename, unknown kind, missing name).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration failures (missing dependency, I/O).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StubsmithError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Run `stubsmith config list` to inspect the effective settings".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in Stubsmith".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StubsmithResult<T> = Result<T, StubsmithError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> StubsmithResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> StubsmithResult<T> {
        self.map_err(|e| StubsmithError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArtifactKind;

    #[test]
    fn categories_flow_from_layers() {
        let input: StubsmithError = DomainError::MissingRequiredField { field: "name" }.into();
        assert_eq!(input.category(), ErrorCategory::Validation);

        let missing: StubsmithError = ApplicationError::MissingDependency {
            kind: ArtifactKind::Model,
            name: "Post".into(),
        }
        .into();
        assert_eq!(missing.category(), ErrorCategory::NotFound);
        assert_eq!(missing.to_string(), "The specified model \"Post\" does not exist.");
    }

    #[test]
    fn context_wraps_foreign_errors() {
        let io: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        let err = io.context("writing stub").unwrap_err();
        assert!(err.to_string().contains("writing stub: disk full"));
    }
}
