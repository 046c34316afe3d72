use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{error::DomainError, identifier::Identifier};

static CLASS_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9._\\/-]+$").expect("valid pattern"));

static PLAIN_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9._-]+$").expect("valid pattern"));

static LANG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]+$").expect("valid pattern"));

static LOCALE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}([_-][A-Za-z0-9]+)*$").expect("valid pattern"));

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+(\.[A-Za-z0-9]+)*$").expect("valid pattern"));

static PHP_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid pattern"));

/// Input checks run before any file is touched.
pub struct InputValidator;

impl InputValidator {
    /// `class-make` filename: may carry `/` or `\` namespace separators.
    pub fn class_filename(name: &str) -> Result<(), DomainError> {
        if CLASS_FILENAME.is_match(name) {
            Ok(())
        } else {
            Err(DomainError::InvalidFilename {
                name: name.to_string(),
                reason: "it must start with a letter and contain only letters, digits, '.', '_', '-', '/' or '\\'".into(),
            })
        }
    }

    /// `file-make` filename: dots are directory separators.
    pub fn plain_filename(name: &str) -> Result<(), DomainError> {
        if PLAIN_FILENAME.is_match(name) {
            Ok(())
        } else {
            Err(DomainError::InvalidFilename {
                name: name.to_string(),
                reason: "it must start with a letter and contain only letters, digits, '.', '_' or '-'".into(),
            })
        }
    }

    pub fn lang_name(name: &str) -> Result<(), DomainError> {
        if LANG_NAME.is_match(name) {
            Ok(())
        } else {
            Err(DomainError::InvalidFilename {
                name: name.to_string(),
                reason: "it must start with a letter and contain only letters and digits".into(),
            })
        }
    }

    /// `lang-make --locale`: `en`, `pt_BR`, `zh-Hans`.
    pub fn locale(locale: &str) -> Result<(), DomainError> {
        if LOCALE.is_match(locale) {
            Ok(())
        } else {
            Err(DomainError::InvalidOption {
                option: "locale",
                value: locale.to_string(),
                reason: "expected a language code such as 'en' or 'pt_BR'".into(),
            })
        }
    }

    /// `file-make --ext`, without its leading dot. `blade.php` is allowed.
    pub fn extension(extension: &str) -> Result<(), DomainError> {
        if EXTENSION.is_match(extension) {
            Ok(())
        } else {
            Err(DomainError::InvalidOption {
                option: "ext",
                value: extension.to_string(),
                reason: "only letters, digits and inner dots are allowed".into(),
            })
        }
    }

    /// Every namespace segment and the leaf must be a PHP identifier.
    pub fn identifier(identifier: &Identifier) -> Result<(), DomainError> {
        let bad = identifier
            .namespace_segments()
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(identifier.leaf()))
            .find(|part| !PHP_IDENTIFIER.is_match(part));

        match bad {
            None => Ok(()),
            Some(part) => Err(DomainError::InvalidIdentifier {
                name: identifier.raw().to_string(),
                reason: if part.is_empty() {
                    "empty namespace segment".into()
                } else {
                    format!("'{part}' is not a valid PHP name")
                },
            }),
        }
    }

    pub fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, DomainError> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(DomainError::MissingRequiredField { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_filenames() {
        assert!(InputValidator::class_filename("Foo/Bar").is_ok());
        assert!(InputValidator::class_filename("App\\Contracts\\Payable").is_ok());
        assert!(InputValidator::class_filename("1Foo").is_err());
        assert!(InputValidator::class_filename("F").is_err());
        assert!(InputValidator::class_filename("Foo Bar").is_err());
    }

    #[test]
    fn plain_filenames_reject_slashes() {
        assert!(InputValidator::plain_filename("config.app").is_ok());
        assert!(InputValidator::plain_filename("config/app").is_err());
    }

    #[test]
    fn lang_names_are_alphanumeric() {
        assert!(InputValidator::lang_name("messages").is_ok());
        assert!(InputValidator::lang_name("auth2").is_ok());
        assert!(InputValidator::lang_name("my-messages").is_err());
        assert!(InputValidator::lang_name("x").is_err());
    }

    #[test]
    fn locales_cannot_leave_the_lang_dir() {
        for ok in ["en", "fr", "pt_BR", "zh-Hans"] {
            assert!(InputValidator::locale(ok).is_ok(), "{ok}");
        }
        for bad in ["../x", "en/../../etc", "", "e", "en/US", "en."] {
            assert!(InputValidator::locale(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn extensions() {
        assert!(InputValidator::extension("json").is_ok());
        assert!(InputValidator::extension("blade.php").is_ok());
        for bad in ["../x", "a/b", "php.", "..", ""] {
            assert!(InputValidator::extension(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn identifiers() {
        assert!(InputValidator::identifier(&Identifier::resolve("Admin/Post")).is_ok());
        assert!(InputValidator::identifier(&Identifier::resolve("Admin//Post")).is_err());
        assert!(InputValidator::identifier(&Identifier::resolve("Post-Item")).is_err());
    }

    #[test]
    fn required_values() {
        assert_eq!(InputValidator::required(Some(" Post "), "name"), Ok("Post"));
        assert_eq!(
            InputValidator::required(Some(""), "name"),
            Err(DomainError::MissingRequiredField { field: "name" })
        );
    }
}
