//! Identifier resolution: `Admin/User` -> leaf `User`, namespace `Admin`.
//!
//! Resolution is purely syntactic. The input is split on `/` when it
//! contains one, otherwise on `\`; the two styles are never mixed in a
//! single input. Nothing here touches the filesystem.

use std::fmt;
use std::path::PathBuf;

use crate::domain::naming::{camel, ucfirst};

/// A user-supplied, possibly namespaced, name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    raw: String,
    leaf: String,
    segments: Vec<String>,
}

impl Identifier {
    /// Split `raw` into its namespace segments and leaf.
    ///
    /// Never fails: a name without separators has no segments and its leaf
    /// is the whole input.
    pub fn resolve(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let separator = if raw.contains('/') { '/' } else { '\\' };

        let mut segments: Vec<String> = raw.split(separator).map(str::to_string).collect();
        // `split` always yields at least one item.
        let leaf = segments.pop().unwrap_or_default();

        Self {
            raw,
            leaf,
            segments,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Final segment, as typed.
    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// Leaf in class form (`post` -> `Post`).
    pub fn class_name(&self) -> String {
        ucfirst(&self.leaf)
    }

    /// Leaf in property form (`PostRepository` -> `postRepository`).
    pub fn property_name(&self) -> String {
        camel(&self.leaf)
    }

    /// All segments before the leaf, in order.
    pub fn namespace_segments(&self) -> &[String] {
        &self.segments
    }

    pub fn has_namespace(&self) -> bool {
        !self.segments.is_empty()
    }

    /// Join the namespace segments with `\`.
    ///
    /// With a `marker` (module context), the first segment is kept and every
    /// later one is followed by the marker: `["Blog", "Admin"]` with
    /// `Entities` gives `Blog\Admin\Entities`.
    pub fn namespace_chain(&self, marker: Option<&str>) -> String {
        let mut chain = String::new();

        for (i, segment) in self.segments.iter().enumerate() {
            chain.push_str(segment);
            chain.push('\\');
            if let Some(marker) = marker.filter(|_| i > 0) {
                chain.push_str(marker);
                chain.push('\\');
            }
        }

        // Trailing separator.
        if chain.ends_with('\\') {
            chain.pop();
        }
        chain
    }

    /// Non-empty namespace segments in class form (`admin` -> `Admin`).
    ///
    /// PSR-4: these name both the namespace suffix and the directories.
    pub fn class_segments(&self) -> Vec<String> {
        self.segments
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| ucfirst(s))
            .collect()
    }

    /// Namespace segments as nested directories (no leaf).
    pub fn directory(&self) -> PathBuf {
        self.class_segments().into_iter().collect()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn plain_name_has_no_namespace() {
        let id = Identifier::resolve("Post");
        assert_eq!(id.leaf(), "Post");
        assert!(id.namespace_segments().is_empty());
        assert_eq!(id.namespace_chain(None), "");
    }

    #[test]
    fn slash_separated_name() {
        let id = Identifier::resolve("Admin/User");
        assert_eq!(id.leaf(), "User");
        assert_eq!(id.namespace_segments(), ["Admin".to_string()]);
        assert_eq!(id.namespace_chain(None), "Admin");
    }

    #[test]
    fn backslash_separated_name() {
        let id = Identifier::resolve("App\\Models\\Post");
        assert_eq!(id.leaf(), "Post");
        assert_eq!(id.namespace_chain(None), "App\\Models");
    }

    #[test]
    fn segment_count_matches_separator_count() {
        for raw in ["a", "a/b", "a/b/c", "a//b", "x\\y\\z\\w", "trailing/"] {
            let separators = raw.matches(['/', '\\']).count();
            let id = Identifier::resolve(raw);
            assert_eq!(id.namespace_segments().len(), separators, "input: {raw}");
            assert_eq!(
                id.leaf(),
                raw.rsplit(['/', '\\']).next().unwrap(),
                "input: {raw}"
            );
        }
    }

    #[test]
    fn mixed_separators_are_not_normalised() {
        let id = Identifier::resolve("Admin/Blog\\Post");
        assert_eq!(id.leaf(), "Blog\\Post");
        assert_eq!(id.namespace_segments(), ["Admin".to_string()]);
    }

    #[test]
    fn module_marker_follows_every_segment_after_the_first() {
        let id = Identifier::resolve("Blog/Admin/Post");
        assert_eq!(id.namespace_chain(Some("Entities")), "Blog\\Admin\\Entities");

        let single = Identifier::resolve("Blog/Post");
        assert_eq!(single.namespace_chain(Some("Repositories")), "Blog");
    }

    #[test]
    fn class_and_property_forms() {
        let id = Identifier::resolve("admin/postRepository");
        assert_eq!(id.class_name(), "PostRepository");
        assert_eq!(id.property_name(), "postRepository");
    }

    #[test]
    fn directory_from_segments() {
        let id = Identifier::resolve("Foo/Bar/Baz");
        assert_eq!(id.directory(), Path::new("Foo").join("Bar"));
    }

    #[test]
    fn directory_segments_are_capitalised() {
        let id = Identifier::resolve("foo/bar/baz");
        assert_eq!(id.class_segments(), ["Foo".to_string(), "Bar".to_string()]);
        assert_eq!(id.directory(), Path::new("Foo").join("Bar"));
    }
}
