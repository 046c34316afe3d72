//! Writing generated text to disk.
//!
//! The materializer owns the overwrite rules: new files are written after
//! creating their parent directories; existing files are replaced only when
//! forced or when the user confirms. Declining is a successful skip.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::application::ports::{Filesystem, Prompt, Reporter};
use crate::domain::ArtifactKind;
use crate::error::StubsmithResult;

/// What to do when the destination already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Ask through the [`Prompt`] port.
    #[default]
    Ask,
    /// Replace silently (`--force`).
    Force,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WritePolicy {
    pub overwrite: Overwrite,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
}

impl WritePolicy {
    pub fn ask() -> Self {
        Self::default()
    }

    pub fn force() -> Self {
        Self {
            overwrite: Overwrite::Force,
            dry_run: false,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.overwrite = if force { Overwrite::Force } else { Overwrite::Ask };
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of one write attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(PathBuf),
    Overwritten(PathBuf),
    /// Existing file kept, or route block already present.
    Skipped(PathBuf),
    /// Block appended to an existing file.
    Appended(PathBuf),
    DryRun(PathBuf),
}

impl Outcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(p)
            | Self::Overwritten(p)
            | Self::Skipped(p)
            | Self::Appended(p)
            | Self::DryRun(p) => p,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Overwritten(_) | Self::Appended(_))
    }
}

pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
    prompt: &'a dyn Prompt,
    reporter: &'a dyn Reporter,
}

impl<'a> Materializer<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        prompt: &'a dyn Prompt,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            filesystem,
            prompt,
            reporter,
        }
    }

    /// Write `content` to `path` following `policy`.
    pub fn materialize(
        &self,
        kind: ArtifactKind,
        path: &Path,
        content: &str,
        policy: &WritePolicy,
    ) -> StubsmithResult<Outcome> {
        let exists = self.filesystem.exists(path);

        if policy.dry_run {
            let verb = if exists { "overwrite" } else { "create" };
            self.reporter
                .info(&format!("[DRY RUN] Would {verb} {}", path.display()));
            return Ok(Outcome::DryRun(path.to_path_buf()));
        }

        if !exists {
            self.write(path, content)?;
            self.reporter.created(kind, path);
            return Ok(Outcome::Created(path.to_path_buf()));
        }

        let replace = match policy.overwrite {
            Overwrite::Force => true,
            Overwrite::Ask => {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.prompt.confirm(&format!(
                    "There is a {} with this name ({name}), do you want to replace it?",
                    kind.label().to_lowercase()
                ))?
            }
        };

        if replace {
            self.write(path, content)?;
            self.reporter.created(kind, path);
            Ok(Outcome::Overwritten(path.to_path_buf()))
        } else {
            debug!(path = %path.display(), "Overwrite declined");
            self.reporter
                .skipped(&format!("Kept existing {}", path.display()));
            Ok(Outcome::Skipped(path.to_path_buf()))
        }
    }

    /// Write a side file (layout, base classes, config) only when it does
    /// not exist yet. Never prompts.
    pub fn write_if_absent(
        &self,
        kind: ArtifactKind,
        path: &Path,
        content: &str,
        policy: &WritePolicy,
    ) -> StubsmithResult<Outcome> {
        if self.filesystem.exists(path) {
            debug!(path = %path.display(), "Side file already present");
            return Ok(Outcome::Skipped(path.to_path_buf()));
        }
        if policy.dry_run {
            self.reporter
                .info(&format!("[DRY RUN] Would create {}", path.display()));
            return Ok(Outcome::DryRun(path.to_path_buf()));
        }

        self.write(path, content)?;
        self.reporter.created(kind, path);
        Ok(Outcome::Created(path.to_path_buf()))
    }

    /// Append `"\n" + block` to `path` unless `marker` already occurs in it.
    ///
    /// A missing file is reported and skipped.
    pub fn append_guarded(
        &self,
        path: &Path,
        block: &str,
        marker: &str,
        policy: &WritePolicy,
    ) -> StubsmithResult<Outcome> {
        if !self.filesystem.exists(path) {
            self.reporter.warn(&format!(
                "{} not found, routes were not added",
                path.display()
            ));
            return Ok(Outcome::Skipped(path.to_path_buf()));
        }

        let current = self.filesystem.read_to_string(path)?;
        if current.contains(marker) {
            self.reporter.skipped(&format!(
                "Routes for '{marker}' already exist in {}",
                path.display()
            ));
            return Ok(Outcome::Skipped(path.to_path_buf()));
        }

        if policy.dry_run {
            self.reporter
                .info(&format!("[DRY RUN] Would append routes to {}", path.display()));
            return Ok(Outcome::DryRun(path.to_path_buf()));
        }

        let updated = format!("{current}\n{block}");
        self.filesystem.write_file(path, &updated)?;
        info!(path = %path.display(), marker, "Routes appended");
        self.reporter
            .info(&format!("Routes added to {}", path.display()));
        Ok(Outcome::Appended(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> StubsmithResult<()> {
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)?;
        info!(path = %path.display(), bytes = content.len(), "Wrote file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockPrompt, MockReporter};

    const PATH: &str = "/p/app/Services/PostService.php";

    fn quiet_reporter() -> MockReporter {
        let mut reporter = MockReporter::new();
        reporter.expect_created().return_const(());
        reporter.expect_skipped().return_const(());
        reporter.expect_info().return_const(());
        reporter.expect_warn().return_const(());
        reporter
    }

    #[test]
    fn new_file_is_written_with_parents() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/p/app/Services"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p == Path::new(PATH) && c == "<?php")
            .times(1)
            .returning(|_, _| Ok(()));
        let mut prompt = MockPrompt::new();
        prompt.expect_confirm().never();
        let mut reporter = MockReporter::new();
        reporter
            .expect_created()
            .withf(|k, p| *k == ArtifactKind::Service && p == Path::new(PATH))
            .times(1)
            .return_const(());

        let m = Materializer::new(&fs, &prompt, &reporter);
        let outcome = m
            .materialize(ArtifactKind::Service, Path::new(PATH), "<?php", &WritePolicy::ask())
            .unwrap();
        assert_eq!(outcome, Outcome::Created(PATH.into()));
    }

    #[test]
    fn declined_overwrite_leaves_file_untouched() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();
        let mut prompt = MockPrompt::new();
        prompt
            .expect_confirm()
            .withf(|q| q.contains("PostService"))
            .times(1)
            .returning(|_| Ok(false));
        let reporter = quiet_reporter();

        let m = Materializer::new(&fs, &prompt, &reporter);
        let outcome = m
            .materialize(ArtifactKind::Service, Path::new(PATH), "new", &WritePolicy::ask())
            .unwrap();
        assert_eq!(outcome, Outcome::Skipped(PATH.into()));
        assert!(!outcome.is_written());
    }

    #[test]
    fn confirmed_overwrite_replaces_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));
        let mut prompt = MockPrompt::new();
        prompt.expect_confirm().times(1).returning(|_| Ok(true));
        let reporter = quiet_reporter();

        let m = Materializer::new(&fs, &prompt, &reporter);
        let outcome = m
            .materialize(ArtifactKind::Service, Path::new(PATH), "new", &WritePolicy::ask())
            .unwrap();
        assert_eq!(outcome, Outcome::Overwritten(PATH.into()));
    }

    #[test]
    fn force_never_prompts() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));
        let mut prompt = MockPrompt::new();
        prompt.expect_confirm().never();
        let reporter = quiet_reporter();

        let m = Materializer::new(&fs, &prompt, &reporter);
        let outcome = m
            .materialize(ArtifactKind::Service, Path::new(PATH), "new", &WritePolicy::force())
            .unwrap();
        assert!(outcome.is_written());
    }

    #[test]
    fn dry_run_neither_prompts_nor_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_write_file().never();
        let mut prompt = MockPrompt::new();
        prompt.expect_confirm().never();
        let mut reporter = MockReporter::new();
        reporter
            .expect_info()
            .withf(|m| m.starts_with("[DRY RUN]"))
            .times(1)
            .return_const(());

        let m = Materializer::new(&fs, &prompt, &reporter);
        let policy = WritePolicy::ask().with_dry_run(true);
        let outcome = m
            .materialize(ArtifactKind::Service, Path::new(PATH), "new", &policy)
            .unwrap();
        assert_eq!(outcome, Outcome::DryRun(PATH.into()));
    }

    #[test]
    fn side_files_are_not_replaced() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_write_file().never();
        let prompt = MockPrompt::new();
        let reporter = MockReporter::new();

        let m = Materializer::new(&fs, &prompt, &reporter);
        let outcome = m
            .write_if_absent(ArtifactKind::File, Path::new("/p/tailwind.config.js"), "", &WritePolicy::force())
            .unwrap();
        assert!(matches!(outcome, Outcome::Skipped(_)));
    }

    #[test]
    fn routes_are_appended_once() {
        let routes = "/p/routes/web.php";
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("<?php\n".to_string()));
        fs.expect_write_file()
            .withf(|_, c| c == "<?php\n\nRoute::resource('articles', ArticleController::class);")
            .times(1)
            .returning(|_, _| Ok(()));
        let prompt = MockPrompt::new();
        let reporter = quiet_reporter();

        let m = Materializer::new(&fs, &prompt, &reporter);
        let outcome = m
            .append_guarded(
                Path::new(routes),
                "Route::resource('articles', ArticleController::class);",
                "articles",
                &WritePolicy::ask(),
            )
            .unwrap();
        assert_eq!(outcome, Outcome::Appended(routes.into()));
    }

    #[test]
    fn present_marker_skips_routes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("Route::resource('articles', X::class);".to_string()));
        fs.expect_write_file().never();
        let prompt = MockPrompt::new();
        let mut reporter = MockReporter::new();
        reporter
            .expect_skipped()
            .withf(|m| m.contains("articles"))
            .times(1)
            .return_const(());

        let m = Materializer::new(&fs, &prompt, &reporter);
        let outcome = m
            .append_guarded(Path::new("/p/routes/web.php"), "block", "articles", &WritePolicy::ask())
            .unwrap();
        assert!(matches!(outcome, Outcome::Skipped(_)));
    }

    #[test]
    fn missing_routes_file_warns() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_read_to_string().never();
        let prompt = MockPrompt::new();
        let mut reporter = MockReporter::new();
        reporter.expect_warn().times(1).return_const(());

        let m = Materializer::new(&fs, &prompt, &reporter);
        let outcome = m
            .append_guarded(Path::new("/p/routes/web.php"), "block", "articles", &WritePolicy::ask())
            .unwrap();
        assert!(matches!(outcome, Outcome::Skipped(_)));
    }
}
