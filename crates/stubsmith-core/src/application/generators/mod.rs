//! Generators - one use case per CLI command.
//!
//! Each `make_*` method resolves names, checks dependencies, loads and fills
//! stubs, and hands the text to the [`Materializer`]. The methods live in one
//! file per artifact type; shared plumbing is here.

mod class;
mod controller;
mod crud;
mod file;
mod lang;
mod repository;
mod resource;
mod resource_crud;
mod service;

pub use controller::ControllerRequest;
pub use crud::{CrudNames, CrudRequest};
pub use lang::LangRequest;
pub use repository::RepositoryRequest;

use tracing::debug;

use crate::{
    application::{
        ports::{Filesystem, Prompt, Reporter, StubStore},
        services::{ExistenceProber, Materializer, Outcome},
    },
    domain::{ArtifactKind, Identifier, ProjectLayout, StubName, Substitutions},
    error::StubsmithResult,
};

/// Every file touched by one command, in pipeline order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub outcomes: Vec<Outcome>,
}

impl GenerationOutcome {
    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn extend(&mut self, other: GenerationOutcome) {
        self.outcomes.extend(other.outcomes);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter()
    }

    pub fn written(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.is_written())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl From<Outcome> for GenerationOutcome {
    fn from(outcome: Outcome) -> Self {
        Self {
            outcomes: vec![outcome],
        }
    }
}

/// Code generation service.
///
/// Owns the driven ports and the project layout for a single invocation.
pub struct Generator {
    filesystem: Box<dyn Filesystem>,
    stubs: Box<dyn StubStore>,
    prompt: Box<dyn Prompt>,
    reporter: Box<dyn Reporter>,
    layout: ProjectLayout,
}

impl Generator {
    /// Create a generator with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stubsmith_core::application::Generator;
    /// use stubsmith_core::domain::ProjectLayout;
    ///
    /// let generator = Generator::new(
    ///     filesystem, // impl Filesystem
    ///     stubs,      // impl StubStore
    ///     prompt,     // impl Prompt
    ///     reporter,   // impl Reporter
    ///     ProjectLayout::at("."),
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        stubs: Box<dyn StubStore>,
        prompt: Box<dyn Prompt>,
        reporter: Box<dyn Reporter>,
        layout: ProjectLayout,
    ) -> Self {
        Self {
            filesystem,
            stubs,
            prompt,
            reporter,
            layout,
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Names of every stub available to this generator.
    pub fn stub_names(&self) -> StubsmithResult<Vec<StubName>> {
        self.stubs.list()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn prober(&self) -> ExistenceProber<'_> {
        ExistenceProber::new(self.filesystem.as_ref(), &self.layout)
    }

    fn materializer(&self) -> Materializer<'_> {
        Materializer::new(
            self.filesystem.as_ref(),
            self.prompt.as_ref(),
            self.reporter.as_ref(),
        )
    }

    /// Load `stub` and apply `substitutions` to it.
    fn render(&self, stub: &str, substitutions: &Substitutions) -> StubsmithResult<String> {
        let name = StubName::new(stub)?;
        let stub = self.stubs.load(&name)?;
        let text = substitutions.apply(&stub.content);

        let leftover = Substitutions::remaining_tokens(&text);
        if !leftover.is_empty() {
            debug!(stub = %name, ?leftover, "Placeholders left after substitution");
        }
        Ok(text)
    }

    /// Namespace of the model referenced by `--model`.
    ///
    /// A namespaced model keeps its own chain; inside a module the chain is
    /// built with the module marker and placed under the modules namespace.
    fn model_namespace(&self, model: &Identifier, module: Option<&str>) -> String {
        if !model.has_namespace() {
            return self.layout.namespace(ArtifactKind::Model, module);
        }
        match module {
            None => model.namespace_chain(None),
            Some(_) => format!(
                "{}\\{}",
                self.layout.modules_namespace,
                model.namespace_chain(ArtifactKind::Model.module_marker())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn outcome_collection_tracks_writes() {
        let mut outcome = GenerationOutcome::default();
        outcome.push(Outcome::Created(PathBuf::from("a.php")));
        outcome.push(Outcome::Skipped(PathBuf::from("b.php")));
        outcome.extend(Outcome::DryRun(PathBuf::from("c.php")).into());

        assert_eq!(outcome.len(), 3);
        assert_eq!(outcome.written().count(), 1);
    }
}
