//! `crud-make` and `resource-crud-make`.

use tracing::{info, instrument};

use stubsmith_core::application::CrudRequest;

use super::{build_generator, finish};
use crate::{
    cli::{CrudArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %args.name))]
pub fn crud(
    args: CrudArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let generator = build_generator(global, config, output)?;
    let request = CrudRequest::new(&args.name, args.field_specs());
    info!(fields = request.fields.len(), "Generating CRUD");

    let outcome = generator.make_crud(&request, &args.write.policy())?;
    finish(output, &outcome)
}

#[instrument(skip_all, fields(name = %args.name))]
pub fn resource_crud(
    args: CrudArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let generator = build_generator(global, config, output)?;
    let request = CrudRequest::new(&args.name, args.field_specs());
    info!(fields = request.fields.len(), "Generating resource CRUD");

    let outcome = generator.make_resource_crud(&request, &args.write.policy())?;
    finish(output, &outcome)
}
