use std::{
    fs,
    path::{Path, PathBuf},
};

use stubsmith_core::{
    application::{ApplicationError, ports::StubStore},
    domain::{Stub, StubName},
    error::StubsmithResult,
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

/// Stubs read from `<root>/<a>/<b>.stub` for the name `a.b`.
#[derive(Debug, Clone)]
pub struct DirectoryStubStore {
    root: PathBuf,
}

impl DirectoryStubStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, name: &StubName) -> PathBuf {
        self.root.join(name.relative_path())
    }
}

impl StubStore for DirectoryStubStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, name: &StubName) -> StubsmithResult<Stub> {
        let path = self.path_of(name);
        if !path.is_file() {
            return Err(ApplicationError::StubNotFound {
                name: name.to_string(),
            }
            .into());
        }

        debug!(path = %path.display(), "Reading stub");
        let content = fs::read_to_string(&path)
            .map_err(|e| ApplicationError::filesystem(&path, e.to_string()))?;
        Ok(Stub::new(name.clone(), content))
    }

    fn list(&self) -> StubsmithResult<Vec<StubName>> {
        if !self.root.is_dir() {
            debug!(root = %self.root.display(), "Stub directory missing, nothing to list");
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry in stub directory");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            match StubName::from_relative_path(relative) {
                Some(name) => names.push(name),
                None => debug!(path = %relative.display(), "Ignoring non-stub file"),
            }
        }

        names.sort();
        Ok(names)
    }
}
