//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stubsmith_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StubsmithError, StubsmithResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> StubsmithResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn create_dir_all(&self, path: &Path) -> StubsmithResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StubsmithResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StubsmithError {
    ApplicationError::filesystem(path, format!("Failed to {operation}: {e}")).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("app").join("Models");
        let file = nested.join("Post.php");

        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&file, "<?php").unwrap();

        assert!(fs.exists(&file));
        assert!(fs.is_dir(&nested));
        assert!(!fs.is_dir(&file));
        assert_eq!(fs.read_to_string(&file).unwrap(), "<?php");
    }

    #[test]
    fn missing_file_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&dir.path().join("nope.php"))
            .unwrap_err();
        assert!(matches!(
            err,
            StubsmithError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
