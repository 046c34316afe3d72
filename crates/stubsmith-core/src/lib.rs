//! Stubsmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Stubsmith, a
//! stub-based code generator for Laravel-style PHP projects, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stubsmith-cli (CLI)            │
//! │   (clap, config, prompts, reporting)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Generator (application layer)       │
//! │  make_class, make_repository, make_crud │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ Filesystem, StubStore, Prompt, Reporter │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   stubsmith-adapters (Infrastructure)   │
//! │ LocalFilesystem, BuiltinStubStore, ...  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ Identifier, Substitutions, ProjectLayout│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stubsmith_core::prelude::*;
//!
//! let generator = Generator::new(filesystem, stubs, prompt, reporter, ProjectLayout::at("."));
//! generator.make_repository(
//!     &RepositoryRequest::new("PostRepository").model("Post"),
//!     &WritePolicy::ask(),
//! )?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ControllerRequest, CrudRequest, GenerationOutcome, Generator, LangRequest, Outcome,
        Overwrite, RepositoryRequest, WritePolicy,
        ports::{Filesystem, Prompt, Reporter, StubStore},
    };
    pub use crate::domain::{
        ArtifactKind, FieldSpec, Identifier, ProjectLayout, Stub, StubName, Substitutions,
        parse_fields,
    };
    pub use crate::error::{StubsmithError, StubsmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
