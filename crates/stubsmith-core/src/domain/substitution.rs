//! Ordered placeholder substitution.
//!
//! A stub is plain text; every literal occurrence of a token is replaced by
//! its value, one token at a time, in insertion order. Later entries see the
//! output of earlier ones, so a token that is a prefix of another
//! (`DummyModel` / `DummyModelNamespace`) must be listed after it.
//!
//! Tokens absent from a stub are silently ignored.

use std::sync::LazyLock;

use regex::Regex;

static LEFTOVER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bDummy[A-Z][A-Za-z]*").expect("leftover token pattern is valid")
});

/// Ordered list of `(token, value)` replacements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    entries: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a replacement, consuming self.
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(token, value);
        self
    }

    pub fn push(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.entries.push((token.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    /// Apply every replacement in order.
    pub fn apply(&self, stub: &str) -> String {
        self.entries
            .iter()
            .fold(stub.to_string(), |text, (token, value)| {
                if token.is_empty() {
                    text
                } else {
                    text.replace(token.as_str(), value)
                }
            })
    }

    /// `Dummy*` tokens still present in `text`, in order of appearance.
    pub fn remaining_tokens(text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for m in LEFTOVER_TOKEN.find_iter(text) {
            if !found.iter().any(|f| f == m.as_str()) {
                found.push(m.as_str().to_string());
            }
        }
        found
    }
}

impl<T, V> FromIterator<(T, V)> for Substitutions
where
    T: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(t, v)| (t.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STUB: &str = "namespace DummyNamespace;\n\nuse DummyModelNamespace\\DummyModel;\n\nclass DummyClass\n{\n    protected $DummyProperty;\n}\n";

    #[test]
    fn empty_list_is_identity() {
        assert_eq!(Substitutions::new().apply(STUB), STUB);
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = Substitutions::new()
            .with("DummyModel", "Post")
            .apply("DummyModel and DummyModel");
        assert_eq!(out, "Post and Post");
    }

    #[test]
    fn missing_token_is_a_no_op() {
        let out = Substitutions::new()
            .with("DummyResource", "PostResource")
            .apply("class DummyClass {}");
        assert_eq!(out, "class DummyClass {}");
    }

    #[test]
    fn longer_token_first_avoids_prefix_collision() {
        let subs = Substitutions::new()
            .with("DummyModelNamespace", "App\\Models")
            .with("DummyModel", "Post")
            .with("DummyNamespace", "App\\Repositories")
            .with("DummyProperty", "post")
            .with("DummyClass", "PostRepository");

        let out = subs.apply(STUB);
        assert!(out.contains("use App\\Models\\Post;"));
        assert!(out.contains("namespace App\\Repositories;"));
        assert!(Substitutions::remaining_tokens(&out).is_empty());
    }

    #[test]
    fn order_is_significant() {
        let wrong = Substitutions::new()
            .with("DummyModel", "Post")
            .with("DummyModelNamespace", "App\\Models");
        assert!(wrong.apply(STUB).contains("use PostNamespace\\Post;"));
    }

    #[test]
    fn reapplying_is_idempotent() {
        let subs: Substitutions = [
            ("DummyModelNamespace", "App\\Models"),
            ("DummyModel", "Post"),
            ("DummyNamespace", "App\\Repositories"),
            ("DummyProperty", "post"),
            ("DummyClass", "PostRepository"),
        ]
        .into_iter()
        .collect();

        let once = subs.apply(STUB);
        assert_eq!(subs.apply(&once), once);
    }

    #[test]
    fn remaining_tokens_are_reported_once() {
        let left = Substitutions::remaining_tokens("DummyClass DummyModel DummyClass");
        assert_eq!(left, vec!["DummyClass".to_string(), "DummyModel".to_string()]);
    }
}
