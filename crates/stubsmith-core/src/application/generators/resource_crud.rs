//! `resource-crud-make`: the CRUD backend plus a resource class describing
//! the form and table, rendered by shared generic views.
//!
//! The base classes (`Resource`, `Form`, `Table`) and the generic views are
//! shared by every resource, so they are written once and never replaced.

use std::path::PathBuf;

use tracing::{info, instrument};

use super::{CrudRequest, GenerationOutcome, Generator};
use crate::{
    application::services::WritePolicy,
    domain::{ArtifactKind, Substitutions, fields},
    error::StubsmithResult,
};

const GENERIC_VIEWS: [&str; 5] = ["_form", "index", "create", "edit", "show"];

impl Generator {
    #[instrument(skip(self, request, policy), fields(name = %request.name, field_count = request.fields.len()))]
    pub fn make_resource_crud(
        &self,
        request: &CrudRequest,
        policy: &WritePolicy,
    ) -> StubsmithResult<GenerationOutcome> {
        let names = self.crud_names(&request.name)?;
        info!(model = %names.model, route = %names.route_prefix, "Generating resource CRUD");

        let resources_ns = format!("{}\\Resources", self.layout.app_namespace);
        let builders_ns = format!("{}\\Builders", self.layout.app_namespace);
        let resources_dir = self.app_subdir("Resources");
        let builders_dir = self.app_subdir("Builders");

        let mut result = self.crud_backend(&names, &request.fields, policy)?;

        result.push(self.crud_controller(
            "crud.controller.resource",
            &names,
            &Substitutions::new()
                .with("DummyResourceNamespace", &resources_ns)
                .with("DummyResourceClass", &names.resource_class),
            policy,
        )?);

        let content = self.render(
            "crud.resource",
            &Substitutions::new()
                .with("DummyFormFields", fields::resource_form_fields(&request.fields))
                .with("DummyTableColumns", fields::resource_table_columns(&request.fields))
                .with("DummyValidationRules", fields::validation_rules(&request.fields))
                .with("DummyBuilderNamespace", &builders_ns)
                .with("DummyResourceClass", &names.resource_class)
                .with("DummyResourceName", &names.model)
                .with("DummyResourcePlural", &names.plural)
                .with("DummyResourceKebab", &names.route_prefix)
                .with("DummyNamespace", &resources_ns)
                .with("DummyModelNamespace", self.layout.namespace(ArtifactKind::Model, None))
                .with("DummyModel", &names.model),
        )?;
        let path = resources_dir.join(format!("{}.php", names.resource_class));
        result.push(
            self.materializer()
                .materialize(ArtifactKind::Resource, &path, &content, policy)?,
        );

        let shared = [
            ("resource.base", resources_dir.join("Resource.php")),
            ("form.builder", builders_dir.join("Form.php")),
            ("table.builder", builders_dir.join("Table.php")),
        ];
        let base_subs = Substitutions::new()
            .with("DummyBuilderNamespace", &builders_ns)
            .with("DummyResourceNamespace", &resources_ns);
        for (stub, path) in shared {
            let content = self.render(stub, &base_subs)?;
            result.push(
                self.materializer()
                    .write_if_absent(ArtifactKind::Class, &path, &content, policy)?,
            );
        }

        let views_dir = self.layout.views_dir().join("resources").join("crud");
        for view in GENERIC_VIEWS {
            let content = self.render(&format!("crud.views.default.{view}"), &Substitutions::new())?;
            let path = views_dir.join(format!("{view}.blade.php"));
            result.push(
                self.materializer()
                    .write_if_absent(ArtifactKind::View, &path, &content, policy)?,
            );
        }

        result.extend(self.crud_finish(&names, policy)?);
        Ok(result)
    }

    fn app_subdir(&self, name: &str) -> PathBuf {
        self.layout.path(&self.layout.app_dir).join(name)
    }
}
