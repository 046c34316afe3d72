//! Existence checks for artifacts a generator depends on.

use std::path::PathBuf;

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::{ArtifactKind, ProjectLayout, naming::ucfirst};

/// Answers "does this model / repository / module already exist?".
///
/// Probing is by basename: `Admin\Post`, `Admin/Post` and `post` all probe
/// the same `Post.php` in the per-kind directory. Absence is an ordinary
/// answer, never an error.
pub struct ExistenceProber<'a> {
    filesystem: &'a dyn Filesystem,
    layout: &'a ProjectLayout,
}

impl<'a> ExistenceProber<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, layout: &'a ProjectLayout) -> Self {
        Self { filesystem, layout }
    }

    /// Conventional file name for `name` as `kind`.
    ///
    /// Repositories get a `Repository` suffix unless they already end in one.
    pub fn file_stem(kind: ArtifactKind, name: &str) -> String {
        let normalized = name.replace('\\', "/");
        let base = ucfirst(normalized.rsplit('/').next().unwrap_or_default());

        if kind == ArtifactKind::Repository && !base.ends_with("Repository") {
            format!("{base}Repository")
        } else {
            base
        }
    }

    /// The single path probed for `name`.
    pub fn artifact_path(&self, kind: ArtifactKind, name: &str, module: Option<&str>) -> PathBuf {
        self.layout
            .kind_dir(kind, module)
            .join(format!("{}.php", Self::file_stem(kind, name)))
    }

    pub fn exists(&self, kind: ArtifactKind, name: &str, module: Option<&str>) -> bool {
        let path = self.artifact_path(kind, name, module);
        let found = self.filesystem.exists(&path);
        debug!(kind = %kind, path = %path.display(), found, "Probed artifact");
        found
    }

    /// `Modules/<Module>` is a directory.
    pub fn module_exists(&self, module: &str) -> bool {
        let dir = self.layout.module_dir(module);
        let found = self.filesystem.is_dir(&dir);
        debug!(module, path = %dir.display(), found, "Probed module");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use std::path::Path;

    #[test]
    fn file_stems_are_basename_normalized() {
        assert_eq!(ExistenceProber::file_stem(ArtifactKind::Model, "Admin\\Post"), "Post");
        assert_eq!(ExistenceProber::file_stem(ArtifactKind::Model, "admin/post"), "Post");
        assert_eq!(
            ExistenceProber::file_stem(ArtifactKind::Repository, "Post"),
            "PostRepository"
        );
        assert_eq!(
            ExistenceProber::file_stem(ArtifactKind::Repository, "PostRepository"),
            "PostRepository"
        );
    }

    #[test]
    fn probes_the_conventional_path() {
        let layout = ProjectLayout::at("/p");
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/p/app/Models/Post.php"));

        let prober = ExistenceProber::new(&fs, &layout);
        assert!(prober.exists(ArtifactKind::Model, "post", None));
        assert!(prober.exists(ArtifactKind::Model, "App\\Models\\Post", None));
        assert!(!prober.exists(ArtifactKind::Model, "Comment", None));
    }

    #[test]
    fn module_probe_uses_module_subpath() {
        let layout = ProjectLayout::at("/p");
        let fs = MockFilesystem::new();
        let prober = ExistenceProber::new(&fs, &layout);

        assert_eq!(
            prober.artifact_path(ArtifactKind::Model, "Post", Some("blog")),
            PathBuf::from("/p/Modules/Blog/Entities/Post.php")
        );
        assert_eq!(
            prober.artifact_path(ArtifactKind::Repository, "Post", Some("Blog")),
            PathBuf::from("/p/Modules/Blog/Repositories/PostRepository.php")
        );
    }

    #[test]
    fn module_exists_checks_directory() {
        let layout = ProjectLayout::at("/p");
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(|p| p == Path::new("/p/Modules/Blog"));

        let prober = ExistenceProber::new(&fs, &layout);
        assert!(prober.module_exists("blog"));
        assert!(!prober.module_exists("Shop"));
    }
}
