use tracing::{info, instrument};

use super::{GenerationOutcome, Generator, RepositoryRequest};
use crate::{
    application::{ApplicationError, services::WritePolicy},
    domain::{
        ArtifactKind, Identifier, InputValidator, Substitutions,
        naming::{camel, studly},
    },
    error::StubsmithResult,
};

/// Arguments of `controller-make`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerRequest {
    pub name: String,
    pub model: Option<String>,
    pub module: Option<String>,
    /// `-r`: create `<Model>Repository` when it does not exist.
    pub with_repository: bool,
    /// `-R`: create `<Model>Resource` when it does not exist.
    pub with_resource: bool,
}

impl Generator {
    /// `controller-make`.
    ///
    /// Without `--model` the controller is empty. With a model, the model
    /// must exist and the controller is wired to `<Model>Repository` and
    /// `<Model>Resource`; `-r` / `-R` create those when missing.
    #[instrument(skip(self, policy), fields(name = %request.name))]
    pub fn make_controller(
        &self,
        request: &ControllerRequest,
        policy: &WritePolicy,
    ) -> StubsmithResult<GenerationOutcome> {
        let id = Identifier::resolve(&request.name);
        InputValidator::identifier(&id)?;
        let module = request.module.as_deref();
        let target = self
            .layout
            .target_as(ArtifactKind::Controller, &id, module, studly(id.leaf()));

        let Some(model) = request.model.as_deref() else {
            let content = self.render(
                "empty.controller",
                &Substitutions::new()
                    .with("DummyNamespace", &target.namespace)
                    .with("DummyClass", &target.class_name),
            )?;
            let outcome = self.materializer().materialize(
                ArtifactKind::Controller,
                &target.destination,
                &content,
                policy,
            )?;
            return Ok(outcome.into());
        };

        let prober = self.prober();
        if let Some(module) = module {
            if !prober.module_exists(module) {
                return Err(ApplicationError::ModuleNotFound {
                    module: module.to_string(),
                }
                .into());
            }
        }
        if !prober.exists(ArtifactKind::Model, model, module) {
            return Err(ApplicationError::MissingDependency {
                kind: ArtifactKind::Model,
                name: model.to_string(),
            }
            .into());
        }

        let model_id = Identifier::resolve(model);
        let model_class = model_id.class_name();
        let repository = format!("{model_class}Repository");
        let resource = format!("{model_class}Resource");
        let mut result = GenerationOutcome::default();

        if !prober.exists(ArtifactKind::Repository, &repository, module) {
            if !request.with_repository {
                return Err(ApplicationError::MissingDependency {
                    kind: ArtifactKind::Repository,
                    name: repository,
                }
                .into());
            }
            info!(%repository, "Creating missing repository");
            let mut dependency = RepositoryRequest::new(&repository).model(model);
            dependency.module = request.module.clone();
            result.extend(self.make_repository(&dependency, policy)?);
        }

        if !prober.exists(ArtifactKind::Resource, &resource, module) {
            if request.with_resource {
                info!(%resource, "Creating missing resource");
                result.extend(self.make_resource(&resource, module, policy)?);
            } else {
                self.reporter.warn(&format!(
                    "{resource} does not exist yet; pass -R to create it"
                ));
            }
        }

        let content = self.render(
            "controller",
            &Substitutions::new()
                .with(
                    "DummyNamespaceRepository",
                    self.layout.namespace(ArtifactKind::Repository, module),
                )
                .with(
                    "DummyNamespaceResource",
                    self.layout.namespace(ArtifactKind::Resource, module),
                )
                .with("DummyNamespace", &target.namespace)
                .with("DummyModelNamespace", self.model_namespace(&model_id, module))
                .with("DummyModel", &model_class)
                .with("DummyProperty", camel(&repository))
                .with("DummyRepository", &repository)
                .with("DummyResource", &resource)
                .with("DummyClass", &target.class_name),
        )?;

        result.push(self.materializer().materialize(
            ArtifactKind::Controller,
            &target.destination,
            &content,
            policy,
        )?);
        Ok(result)
    }
}
