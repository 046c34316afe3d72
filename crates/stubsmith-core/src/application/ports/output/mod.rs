//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generators need from the outside world.
//! The `stubsmith-adapters` crate and the CLI provide implementations.

use std::path::Path;

use crate::domain::{ArtifactKind, Stub, StubName};
use crate::error::StubsmithResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stubsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `stubsmith_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> StubsmithResult<String>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StubsmithResult<()>;

    /// Write content to a file, replacing it if present.
    ///
    /// The parent directory must already exist.
    fn write_file(&self, path: &Path, content: &str) -> StubsmithResult<()>;
}

/// Port for stub retrieval.
///
/// Implemented by:
/// - `stubsmith_adapters::stub_store::BuiltinStubStore` (compiled-in stubs)
/// - `stubsmith_adapters::stub_store::DirectoryStubStore` (user overrides)
/// - `stubsmith_adapters::stub_store::LayeredStubStore` (overrides, then builtin)
pub trait StubStore: Send + Sync {
    /// Load a stub, failing with `StubNotFound` when absent.
    fn load(&self, name: &StubName) -> StubsmithResult<Stub>;

    /// Names of every stub this store can serve, sorted.
    fn list(&self) -> StubsmithResult<Vec<StubName>>;
}

/// Yes/no confirmation, asked before overwriting an existing file.
#[cfg_attr(test, mockall::automock)]
pub trait Prompt: Send + Sync {
    fn confirm(&self, question: &str) -> StubsmithResult<bool>;
}

/// Sink for the user-facing lines of a generation run, in order.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    /// A file was written.
    fn created(&self, kind: ArtifactKind, path: &Path);

    /// A step was skipped (declined overwrite, route already present).
    fn skipped(&self, message: &str);

    fn warn(&self, message: &str);

    fn info(&self, message: &str);
}
