use tracing::instrument;

use super::{GenerationOutcome, Generator};
use crate::{
    application::services::WritePolicy, domain::ArtifactKind, error::StubsmithResult,
};

impl Generator {
    /// `resource-make`: an empty API resource (`JsonResource`) class.
    #[instrument(skip(self, policy))]
    pub fn make_resource(
        &self,
        name: &str,
        module: Option<&str>,
        policy: &WritePolicy,
    ) -> StubsmithResult<GenerationOutcome> {
        self.make_plain(ArtifactKind::Resource, "empty.resource", name, module, policy)
    }
}
