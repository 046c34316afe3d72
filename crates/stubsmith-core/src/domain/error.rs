// ============================================================================
// domain/error.rs - INPUT AND NAMING ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are raised before any file is touched: they describe input
/// that can never be turned into a generation target.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid identifier '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },

    #[error("The filename '{name}' is not correct: {reason}")]
    InvalidFilename { name: String, reason: String },

    #[error("Invalid kind '{kind}'. The kind must be one of: {expected}")]
    InvalidKind {
        kind: String,
        expected: &'static str,
    },

    #[error("Invalid --{option} value '{value}': {reason}")]
    InvalidOption {
        option: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid stub name '{name}'")]
    InvalidStubName { name: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required value missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { name, .. } => vec![
                format!("'{}' cannot be used as a class name", name),
                "Use letters and digits, separate namespaces with '/' or '\\'".into(),
                "Example: Admin/UserRepository".into(),
            ],
            Self::InvalidFilename { .. } => vec![
                "Start the name with a letter".into(),
                "Only alphanumeric characters, dots, underscores and hyphens are allowed".into(),
            ],
            Self::InvalidKind { expected, .. } => vec![format!("Use one of: {}", expected)],
            Self::InvalidOption { option, .. } => vec![
                format!("Pass a single path segment to --{}", option),
                "Separators such as '/' and '..' are not allowed".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                "Use --help for usage information".into(),
            ],
            Self::InvalidStubName { .. } => {
                vec!["Stub names are dotted paths such as 'crud.views.index'".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidStubName { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_errors_are_validation() {
        let err = DomainError::InvalidFilename {
            name: "1abc".into(),
            reason: "must start with a letter".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("1abc"));
    }

    #[test]
    fn option_errors_name_the_flag() {
        let err = DomainError::InvalidOption {
            option: "locale",
            value: "../x".into(),
            reason: "bad".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().starts_with("Invalid --locale value '../x'"));
    }

    #[test]
    fn invalid_kind_lists_expected_values() {
        let err = DomainError::InvalidKind {
            kind: "enum".into(),
            expected: "class, trait, interface",
        };
        assert!(err.suggestions()[0].contains("trait"));
    }
}
