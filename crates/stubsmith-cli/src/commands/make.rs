//! Single-artifact generators: `class-make`, `repository-make`,
//! `service-make`, `resource-make`, `controller-make`, `file-make` and
//! `lang-make`.

use tracing::instrument;

use stubsmith_core::application::{ControllerRequest, LangRequest, RepositoryRequest};

use super::{build_generator, finish};
use crate::{
    cli::{
        ClassMakeArgs, ControllerMakeArgs, FileMakeArgs, GlobalArgs, LangMakeArgs,
        ModuleScopedArgs, RepositoryMakeArgs,
    },
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(filename = %args.filename))]
pub fn class(
    args: ClassMakeArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let generator = build_generator(global, config, output)?;
    let outcome = generator.make_class(&args.filename, args.kind.into(), &args.write.policy())?;
    finish(output, &outcome)
}

#[instrument(skip_all, fields(name = %args.name))]
pub fn repository(
    args: RepositoryMakeArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let generator = build_generator(global, config, output)?;

    let mut request = RepositoryRequest::new(&args.name);
    if let Some(model) = &args.model {
        request = request.model(model);
    }
    if let Some(module) = &args.module {
        request = request.module(module);
    }

    let outcome = generator.make_repository(&request, &args.write.policy())?;
    finish(output, &outcome)
}

#[instrument(skip_all, fields(name = %args.name))]
pub fn service(
    args: ModuleScopedArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let generator = build_generator(global, config, output)?;
    let outcome =
        generator.make_service(&args.name, args.module.as_deref(), &args.write.policy())?;
    finish(output, &outcome)
}

#[instrument(skip_all, fields(name = %args.name))]
pub fn resource(
    args: ModuleScopedArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let generator = build_generator(global, config, output)?;
    let outcome =
        generator.make_resource(&args.name, args.module.as_deref(), &args.write.policy())?;
    finish(output, &outcome)
}

#[instrument(skip_all, fields(name = %args.name))]
pub fn controller(
    args: ControllerMakeArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let generator = build_generator(global, config, output)?;
    let policy = args.write.policy();
    let request = ControllerRequest {
        name: args.name,
        model: args.model,
        module: args.module,
        with_repository: args.repository,
        with_resource: args.resource,
    };
    let outcome = generator.make_controller(&request, &policy)?;
    finish(output, &outcome)
}

#[instrument(skip_all, fields(filename = %args.filename))]
pub fn file(
    args: FileMakeArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let generator = build_generator(global, config, output)?;
    let outcome = generator.make_file(&args.filename, Some(&args.ext), &args.write.policy())?;
    finish(output, &outcome)
}

#[instrument(skip_all, fields(locale = %args.locale))]
pub fn lang(
    args: LangMakeArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let generator = build_generator(global, config, output)?;
    let policy = args.write.policy();
    let request = LangRequest {
        name: args.name,
        locale: args.locale,
        json: args.json,
    };
    let outcome = generator.make_lang(&request, &policy)?;
    finish(output, &outcome)
}
