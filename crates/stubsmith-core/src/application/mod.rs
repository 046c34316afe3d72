//! Application layer for Stubsmith.
//!
//! This layer contains:
//! - **Generators**: one use case per command (`Generator::make_*`)
//! - **Services**: existence probing and file materialization
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; naming and
//! substitution rules live in `crate::domain`.

pub mod error;
pub mod generators;
pub mod ports;
pub mod services;

pub use generators::{
    ControllerRequest, CrudNames, CrudRequest, GenerationOutcome, Generator, LangRequest,
    RepositoryRequest,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Prompt, Reporter, StubStore};

pub use services::{ExistenceProber, Materializer, Outcome, Overwrite, WritePolicy};

pub use error::ApplicationError;
