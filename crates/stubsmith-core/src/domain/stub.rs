use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Dotted stub name such as `crud.views.index`.
///
/// Each dot-separated part must be non-empty and made of ASCII
/// alphanumerics, `_` or `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StubName(String);

impl StubName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let valid = !name.is_empty()
            && name.split('.').all(|part| {
                !part.is_empty()
                    && part
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            });

        if valid {
            Ok(Self(name))
        } else {
            Err(DomainError::InvalidStubName { name })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `crud.views.index` -> `crud/views/index.stub`
    pub fn relative_path(&self) -> PathBuf {
        let mut parts: Vec<&str> = self.0.split('.').collect();
        let last = parts.pop().unwrap_or_default();
        let mut path: PathBuf = parts.into_iter().collect();
        path.push(format!("{last}.stub"));
        path
    }

    /// Inverse of [`relative_path`](Self::relative_path), for directory
    /// listings. Returns `None` for files that are not `.stub`.
    pub fn from_relative_path(path: &std::path::Path) -> Option<Self> {
        if path.extension().and_then(|e| e.to_str()) != Some("stub") {
            return None;
        }
        let stem = path.with_extension("");
        let dotted = stem
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?
            .join(".");
        Self::new(dotted).ok()
    }
}

impl fmt::Display for StubName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StubName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A loaded template: its name and raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stub {
    pub name: StubName,
    pub content: String,
}

impl Stub {
    pub fn new(name: StubName, content: impl Into<String>) -> Self {
        Self {
            name,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn dots_become_directories() {
        let name = StubName::new("crud.views.index").unwrap();
        assert_eq!(
            name.relative_path(),
            Path::new("crud").join("views").join("index.stub")
        );
        assert_eq!(
            StubName::new("repository").unwrap().relative_path(),
            PathBuf::from("repository.stub")
        );
    }

    #[test]
    fn rejects_malformed_names() {
        for bad in ["", ".", "crud..model", "crud/model", "../etc", "crud.model."] {
            assert!(StubName::new(bad).is_err(), "{bad:?}");
        }
        assert!(StubName::new("crud.views.default._form").is_ok());
    }

    #[test]
    fn recovers_name_from_listing() {
        let path = Path::new("crud").join("views").join("default").join("_form.stub");
        assert_eq!(
            StubName::from_relative_path(&path).map(|n| n.to_string()),
            Some("crud.views.default._form".to_string())
        );
        assert_eq!(StubName::from_relative_path(Path::new("README.md")), None);
    }
}
