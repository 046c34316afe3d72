//! Infrastructure adapters for Stubsmith.
//!
//! This crate implements the ports defined in `stubsmith_core::application::ports`
//! and ships the builtin stub texts. Terminal prompting and coloured output
//! live in the CLI.

pub mod filesystem;
pub mod prompt;
pub mod reporter;
pub mod stub_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::{FixedAnswer, ScriptedPrompt};
pub use reporter::{Event, RecordingReporter};
pub use stub_store::{BuiltinStubStore, DirectoryStubStore, LayeredStubStore};
