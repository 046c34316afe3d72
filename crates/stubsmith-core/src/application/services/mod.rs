//! Application services shared by the generators.
//!
//! - [`ExistenceProber`]: does a referenced model / repository / module exist?
//! - [`Materializer`]: write files under the overwrite policy.

pub mod materializer;
pub mod prober;

pub use materializer::{Materializer, Outcome, Overwrite, WritePolicy};
pub use prober::ExistenceProber;
