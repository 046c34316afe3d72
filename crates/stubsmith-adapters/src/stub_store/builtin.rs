use stubsmith_core::{
    application::{ApplicationError, ports::StubStore},
    domain::{Stub, StubName},
    error::StubsmithResult,
};
use tracing::debug;

macro_rules! builtin_stubs {
    ($($name:literal => $file:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../../stubs/", $file)))),*]
    };
}

/// Name and text of every stub shipped with stubsmith, sorted by name.
static BUILTIN: &[(&str, &str)] = builtin_stubs! {
    "class" => "class.stub",
    "controller" => "controller.stub",
    "crud.controller" => "crud/controller.stub",
    "crud.controller.resource" => "crud/controller/resource.stub",
    "crud.layout" => "crud/layout.stub",
    "crud.model" => "crud/model.stub",
    "crud.resource" => "crud/resource.stub",
    "crud.routes" => "crud/routes.stub",
    "crud.service" => "crud/service.stub",
    "crud.views.create" => "crud/views/create.stub",
    "crud.views.default._form" => "crud/views/default/_form.stub",
    "crud.views.default.create" => "crud/views/default/create.stub",
    "crud.views.default.edit" => "crud/views/default/edit.stub",
    "crud.views.default.index" => "crud/views/default/index.stub",
    "crud.views.default.show" => "crud/views/default/show.stub",
    "crud.views.edit" => "crud/views/edit.stub",
    "crud.views.index" => "crud/views/index.stub",
    "crud.views.show" => "crud/views/show.stub",
    "empty.controller" => "empty/controller.stub",
    "empty.repository" => "empty/repository.stub",
    "empty.resource" => "empty/resource.stub",
    "empty.service" => "empty/service.stub",
    "form.builder" => "form/builder.stub",
    "interface" => "interface.stub",
    "lang" => "lang.stub",
    "repository" => "repository.stub",
    "resource.base" => "resource/base.stub",
    "table.builder" => "table/builder.stub",
    "tailwind.config" => "tailwind/config.stub",
    "trait" => "trait.stub",
};

/// The stub set compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStubStore;

impl BuiltinStubStore {
    pub fn new() -> Self {
        Self
    }

    /// Raw text of a builtin stub, if it exists.
    pub fn get(name: &str) -> Option<&'static str> {
        BUILTIN
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(_, content)| *content)
    }

    /// `(name, text)` of every builtin stub, e.g. for publishing them.
    pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
        BUILTIN.iter().copied()
    }
}

impl StubStore for BuiltinStubStore {
    fn load(&self, name: &StubName) -> StubsmithResult<Stub> {
        debug!(stub = %name, "Loading builtin stub");
        let content = Self::get(name.as_str()).ok_or_else(|| ApplicationError::StubNotFound {
            name: name.to_string(),
        })?;
        Ok(Stub::new(name.clone(), content))
    }

    fn list(&self) -> StubsmithResult<Vec<StubName>> {
        BUILTIN
            .iter()
            .map(|(name, _)| StubName::new(*name).map_err(Into::into))
            .collect()
    }
}
