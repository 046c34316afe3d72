use tracing::{info, instrument};

use super::{GenerationOutcome, Generator};
use crate::{
    application::{
        ApplicationError,
        services::{ExistenceProber, WritePolicy},
    },
    domain::{ArtifactKind, Identifier, InputValidator, Substitutions},
    error::StubsmithResult,
};

/// Arguments of `repository-make`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryRequest {
    pub name: String,
    pub model: Option<String>,
    pub module: Option<String>,
}

impl RepositoryRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }
}

impl Generator {
    /// `repository-make`: an empty repository, or one bound to an existing
    /// model. The class name always ends in `Repository`.
    #[instrument(skip(self, policy), fields(name = %request.name))]
    pub fn make_repository(
        &self,
        request: &RepositoryRequest,
        policy: &WritePolicy,
    ) -> StubsmithResult<GenerationOutcome> {
        let id = Identifier::resolve(&request.name);
        InputValidator::identifier(&id)?;
        let module = request.module.as_deref();

        if let Some(module) = module {
            if !self.prober().module_exists(module) {
                return Err(ApplicationError::ModuleNotFound {
                    module: module.to_string(),
                }
                .into());
            }
        }

        let class_name = ExistenceProber::file_stem(ArtifactKind::Repository, &request.name);
        let target = self
            .layout
            .target_as(ArtifactKind::Repository, &id, module, class_name);

        let content = match request.model.as_deref() {
            None => self.render(
                "empty.repository",
                &Substitutions::new()
                    .with("DummyNamespace", &target.namespace)
                    .with("DummyClass", &target.class_name),
            )?,
            Some(model) => {
                if !self.prober().exists(ArtifactKind::Model, model, module) {
                    return Err(ApplicationError::MissingDependency {
                        kind: ArtifactKind::Model,
                        name: model.to_string(),
                    }
                    .into());
                }
                let model_id = Identifier::resolve(model);
                info!(model = %model_id, "Binding repository to model");

                self.render(
                    "repository",
                    &Substitutions::new()
                        .with("DummyNamespace", &target.namespace)
                        .with("DummyModelNamespace", self.model_namespace(&model_id, module))
                        .with("DummyModel", model_id.class_name())
                        .with("DummyProperty", model_id.property_name())
                        .with("DummyClass", &target.class_name),
                )?
            }
        };

        let outcome = self.materializer().materialize(
            ArtifactKind::Repository,
            &target.destination,
            &content,
            policy,
        )?;
        Ok(outcome.into())
    }
}
