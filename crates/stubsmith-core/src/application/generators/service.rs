use tracing::instrument;

use super::{GenerationOutcome, Generator};
use crate::{
    application::services::WritePolicy,
    domain::{ArtifactKind, Identifier, InputValidator, Substitutions},
    error::StubsmithResult,
};

impl Generator {
    /// `service-make`: an empty service class.
    #[instrument(skip(self, policy))]
    pub fn make_service(
        &self,
        name: &str,
        module: Option<&str>,
        policy: &WritePolicy,
    ) -> StubsmithResult<GenerationOutcome> {
        self.make_plain(ArtifactKind::Service, "empty.service", name, module, policy)
    }

    /// Shared by the service and resource generators: one stub with only a
    /// namespace and a class name.
    pub(super) fn make_plain(
        &self,
        kind: ArtifactKind,
        stub: &str,
        name: &str,
        module: Option<&str>,
        policy: &WritePolicy,
    ) -> StubsmithResult<GenerationOutcome> {
        let id = Identifier::resolve(name);
        InputValidator::identifier(&id)?;
        let target = self.layout.target(kind, &id, module);

        let content = self.render(
            stub,
            &Substitutions::new()
                .with("DummyNamespace", &target.namespace)
                .with("DummyClass", &target.class_name),
        )?;

        let outcome = self
            .materializer()
            .materialize(kind, &target.destination, &content, policy)?;
        Ok(outcome.into())
    }
}
