//! Stub store adapters.
//!
//! - [`BuiltinStubStore`]: the stubs compiled into the binary.
//! - [`DirectoryStubStore`]: `.stub` files under a directory, re-read on
//!   every load so edits are picked up without a rebuild.
//! - [`LayeredStubStore`]: the first store that has a stub wins.

mod builtin;
mod directory;
mod layered;

pub use builtin::BuiltinStubStore;
pub use directory::DirectoryStubStore;
pub use layered::LayeredStubStore;
