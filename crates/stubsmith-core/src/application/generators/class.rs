use tracing::instrument;

use super::{GenerationOutcome, Generator};
use crate::{
    application::services::WritePolicy,
    domain::{ArtifactKind, DomainError, Identifier, InputValidator, Substitutions},
    error::StubsmithResult,
};

impl Generator {
    /// `class-make`: a bare class, trait or interface at the project root.
    ///
    /// `Foo/Bar` is written to `Foo/Bar.php` with `namespace Foo;`.
    #[instrument(skip(self, policy), fields(kind = %kind))]
    pub fn make_class(
        &self,
        filename: &str,
        kind: ArtifactKind,
        policy: &WritePolicy,
    ) -> StubsmithResult<GenerationOutcome> {
        InputValidator::class_filename(filename)?;
        let keyword = kind.class_like_keyword().ok_or_else(|| DomainError::InvalidKind {
            kind: kind.label().to_lowercase(),
            expected: ArtifactKind::CLASS_LIKE,
        })?;

        let id = Identifier::resolve(filename);
        let target = self.layout.target(kind, &id, None);

        let mut subs = Substitutions::new();
        if target.namespace.is_empty() {
            subs.push("DummyNamespace\n\n", "");
            subs.push("DummyNamespace", "");
        } else {
            subs.push("DummyNamespace", format!("namespace {};", target.namespace));
        }
        subs.push(format!("Dummy{}", kind.label()), target.class_name.clone());

        let content = self.render(keyword, &subs)?;
        let outcome = self
            .materializer()
            .materialize(kind, &target.destination, &content, policy)?;
        Ok(outcome.into())
    }
}
