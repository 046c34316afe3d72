//! `crud-make`: model, repository, service, controller, Blade views and
//! routes for one entity, in that order.
//!
//! Every derived name is computed once in [`CrudNames`] and reused by all
//! steps, so the variable the controller hands to a view is the one the
//! view reads. A failing step aborts the rest; files already written stay.

use tracing::{info, instrument};

use super::{GenerationOutcome, Generator};
use crate::{
    application::services::{Outcome, WritePolicy},
    domain::{
        ArtifactKind, FieldSpec, Identifier, InputValidator, Substitutions, ValueBinding, fields,
        naming::{camel, kebab, plural, snake, studly},
    },
    error::StubsmithResult,
};

/// Arguments of `crud-make` and `resource-crud-make`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrudRequest {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl CrudRequest {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// Names derived from the entity name, shared by every file of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrudNames {
    /// `Article`
    pub model: String,
    /// `Articles`
    pub plural: String,
    /// `article`
    pub variable: String,
    /// `articles`
    pub plural_variable: String,
    /// `articles`
    pub table: String,
    /// `articles`; also the view directory and the route guard.
    pub route_prefix: String,
    pub repository: String,
    pub service: String,
    pub controller: String,
    /// `ArticleResource` (resource-CRUD only).
    pub resource_class: String,
}

impl CrudNames {
    pub fn derive(leaf: &str) -> Self {
        let model = studly(leaf);
        let plural = plural(&model);

        Self {
            variable: camel(&model),
            plural_variable: camel(&plural),
            table: snake(&plural),
            route_prefix: kebab(&plural),
            repository: format!("{model}Repository"),
            service: format!("{model}Service"),
            controller: format!("{model}Controller"),
            resource_class: format!("{model}Resource"),
            plural,
            model,
        }
    }
}

impl Generator {
    #[instrument(skip(self, request, policy), fields(name = %request.name, field_count = request.fields.len()))]
    pub fn make_crud(
        &self,
        request: &CrudRequest,
        policy: &WritePolicy,
    ) -> StubsmithResult<GenerationOutcome> {
        let names = self.crud_names(&request.name)?;
        info!(model = %names.model, route = %names.route_prefix, "Generating CRUD");

        let mut result = self.crud_backend(&names, &request.fields, policy)?;
        result.push(self.crud_controller("crud.controller", &names, &Substitutions::new(), policy)?);

        let view_dir = self.layout.views_dir().join(&names.route_prefix);
        let base = self.view_substitutions(&names);
        let views = [
            ("index", base.clone()),
            (
                "create",
                base.clone().with(
                    "DummyFormFields",
                    fields::blade_form_fields(&request.fields, ValueBinding::Create),
                ),
            ),
            (
                "edit",
                base.clone().with(
                    "DummyFormFields",
                    fields::blade_form_fields(&request.fields, ValueBinding::Edit(&names.variable)),
                ),
            ),
            (
                "show",
                base.with(
                    "DummyDetailFields",
                    fields::blade_detail_fields(&request.fields, &names.variable),
                ),
            ),
        ];
        for (view, subs) in views {
            let content = self.render(&format!("crud.views.{view}"), &subs)?;
            let path = view_dir.join(format!("{view}.blade.php"));
            result.push(
                self.materializer()
                    .materialize(ArtifactKind::View, &path, &content, policy)?,
            );
        }

        result.extend(self.crud_finish(&names, policy)?);
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // Steps shared with resource-crud-make
    // -------------------------------------------------------------------------

    pub(super) fn crud_names(&self, name: &str) -> StubsmithResult<CrudNames> {
        let id = Identifier::resolve(name);
        InputValidator::identifier(&id)?;
        Ok(CrudNames::derive(id.leaf()))
    }

    /// Model, repository and service.
    pub(super) fn crud_backend(
        &self,
        names: &CrudNames,
        specs: &[FieldSpec],
        policy: &WritePolicy,
    ) -> StubsmithResult<GenerationOutcome> {
        let id = Identifier::resolve(&names.model);
        let model_ns = self.layout.namespace(ArtifactKind::Model, None);
        let repository_ns = self.layout.namespace(ArtifactKind::Repository, None);
        let mut result = GenerationOutcome::default();

        let model = self.layout.target(ArtifactKind::Model, &id, None);
        let content = self.render(
            "crud.model",
            &Substitutions::new()
                .with("DummyNamespace", &model.namespace)
                .with("DummyFillable", fields::fillable(specs))
                .with("DummyTable", &names.table)
                .with("DummyModel", &names.model),
        )?;
        result.push(self.materializer().materialize(
            ArtifactKind::Model,
            &model.destination,
            &content,
            policy,
        )?);

        let repository =
            self.layout
                .target_as(ArtifactKind::Repository, &id, None, names.repository.clone());
        let content = self.render(
            "repository",
            &Substitutions::new()
                .with("DummyNamespace", &repository.namespace)
                .with("DummyModelNamespace", &model_ns)
                .with("DummyModel", &names.model)
                .with("DummyProperty", &names.variable)
                .with("DummyClass", &names.repository),
        )?;
        result.push(self.materializer().materialize(
            ArtifactKind::Repository,
            &repository.destination,
            &content,
            policy,
        )?);

        let service = self
            .layout
            .target_as(ArtifactKind::Service, &id, None, names.service.clone());
        let content = self.render(
            "crud.service",
            &Substitutions::new()
                .with("DummyNamespaceRepository", &repository_ns)
                .with("DummyNamespace", &service.namespace)
                .with("DummyModelNamespace", &model_ns)
                .with("DummyRepository", &names.repository)
                .with("DummyModel", &names.model)
                .with("DummyProperty", camel(&names.repository))
                .with("DummyClass", &names.service),
        )?;
        result.push(self.materializer().materialize(
            ArtifactKind::Service,
            &service.destination,
            &content,
            policy,
        )?);

        Ok(result)
    }

    /// Controller from `stub`; `extra` is applied before the shared tokens.
    pub(super) fn crud_controller(
        &self,
        stub: &str,
        names: &CrudNames,
        extra: &Substitutions,
        policy: &WritePolicy,
    ) -> StubsmithResult<Outcome> {
        let id = Identifier::resolve(&names.model);
        let target =
            self.layout
                .target_as(ArtifactKind::Controller, &id, None, names.controller.clone());

        let subs: Substitutions = extra
            .iter()
            .chain([
                (
                    "DummyNamespaceService",
                    self.layout.namespace(ArtifactKind::Service, None).as_str(),
                ),
                ("DummyNamespace", target.namespace.as_str()),
                (
                    "DummyModelNamespace",
                    self.layout.namespace(ArtifactKind::Model, None).as_str(),
                ),
                ("DummyService", names.service.as_str()),
                ("DummyModel", names.model.as_str()),
                ("DummyProperty", camel(&names.service).as_str()),
                ("DummyPluralVariable", names.plural_variable.as_str()),
                ("DummyVariable", names.variable.as_str()),
                ("DummyViewPath", names.route_prefix.as_str()),
                ("DummyRoutePrefix", names.route_prefix.as_str()),
                ("DummyClass", names.controller.as_str()),
            ])
            .collect();

        let content = self.render(stub, &subs)?;
        self.materializer()
            .materialize(ArtifactKind::Controller, &target.destination, &content, policy)
    }

    /// Route block, layout and tailwind config.
    pub(super) fn crud_finish(
        &self,
        names: &CrudNames,
        policy: &WritePolicy,
    ) -> StubsmithResult<GenerationOutcome> {
        let mut result = GenerationOutcome::default();
        let materializer = self.materializer();

        let block = self.render(
            "crud.routes",
            &Substitutions::new()
                .with(
                    "DummyNamespaceController",
                    self.layout.namespace(ArtifactKind::Controller, None),
                )
                .with("DummyController", &names.controller)
                .with("DummyRoutePrefix", &names.route_prefix)
                .with("DummyModel", &names.model),
        )?;
        result.push(materializer.append_guarded(
            &self.layout.routes_file(),
            &block,
            &names.route_prefix,
            policy,
        )?);

        let layout_path = self.layout.views_dir().join("layouts").join("app.blade.php");
        let content = self.render("crud.layout", &Substitutions::new())?;
        result.push(materializer.write_if_absent(ArtifactKind::View, &layout_path, &content, policy)?);

        let tailwind_path = self.layout.path("tailwind.config.js");
        let content = self.render("tailwind.config", &Substitutions::new())?;
        result.push(materializer.write_if_absent(ArtifactKind::File, &tailwind_path, &content, policy)?);

        Ok(result)
    }

    fn view_substitutions(&self, names: &CrudNames) -> Substitutions {
        Substitutions::new()
            .with("DummyResourceKebab", &names.route_prefix)
            .with("DummyResourcePlural", &names.plural)
            .with("DummyResource", &names.model)
            .with("DummyPluralVariable", &names.plural_variable)
            .with("DummyVariable", &names.variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_for_single_word() {
        let names = CrudNames::derive("article");
        assert_eq!(names.model, "Article");
        assert_eq!(names.plural, "Articles");
        assert_eq!(names.variable, "article");
        assert_eq!(names.plural_variable, "articles");
        assert_eq!(names.table, "articles");
        assert_eq!(names.route_prefix, "articles");
        assert_eq!(names.controller, "ArticleController");
    }

    #[test]
    fn names_for_compound_word() {
        let names = CrudNames::derive("BlogCategory");
        assert_eq!(names.plural, "BlogCategories");
        assert_eq!(names.variable, "blogCategory");
        assert_eq!(names.plural_variable, "blogCategories");
        assert_eq!(names.table, "blog_categories");
        assert_eq!(names.route_prefix, "blog-categories");
        assert_eq!(names.repository, "BlogCategoryRepository");
    }
}
