//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stubsmith-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the generators
//!   - `Filesystem`: existence checks, reads, writes
//!   - `StubStore`: template retrieval
//!   - `Prompt`: overwrite confirmation
//!   - `Reporter`: user-facing progress lines
//!
//! - **Driving (Input) Ports**: the `Generator` methods, called by the CLI

pub mod output;

pub use output::{Filesystem, Prompt, Reporter, StubStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockPrompt, MockReporter};
