// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stubsmith.
//!
//! Pure, synchronous logic: turning user input into names, namespaces,
//! destination paths and substituted stub text. All I/O (filesystem, stub
//! storage, prompting) is reached through the ports in the application layer.
//!
//! ## Rules of the layer
//!
//! - **No I/O**: nothing here reads or writes files
//! - **Deterministic**: the same input always yields the same paths and text
//! - **Cheap values**: everything is `Clone` and compared by value

pub mod error;
pub mod fields;
pub mod identifier;
pub mod layout;
pub mod naming;
pub mod stub;
pub mod substitution;

mod validation;

pub use error::{DomainError, ErrorCategory};
pub use fields::{FieldSpec, ValueBinding, parse_fields};
pub use identifier::Identifier;
pub use layout::{ArtifactKind, GenerationTarget, KindDirs, ProjectLayout};
pub use stub::{Stub, StubName};
pub use substitution::Substitutions;
pub use validation::InputValidator;
