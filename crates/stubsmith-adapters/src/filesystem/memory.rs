//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stubsmith_core::{
    application::{ApplicationError, ports::Filesystem},
    error::StubsmithResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to a
/// generator and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_chain(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and its parent directories (test setup helper).
    pub fn seed(&self, path: impl AsRef<Path>, content: &str) -> &Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.add_dir_chain(parent);
            }
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
        self
    }

    /// Add a directory and its parents (test setup helper).
    pub fn seed_dir(&self, path: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_dir_chain(path.as_ref());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> StubsmithResult<String> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockPoisoned)?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::filesystem(path, "No such file").into())
    }

    fn create_dir_all(&self, path: &Path) -> StubsmithResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;
        if inner.files.contains_key(path) {
            return Err(ApplicationError::filesystem(path, "A file exists at this path").into());
        }
        inner.add_dir_chain(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StubsmithResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(
                    ApplicationError::filesystem(path, "Parent directory does not exist").into(),
                );
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
