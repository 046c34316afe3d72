//! Command handlers.
//!
//! Each handler translates parsed arguments into a core request, runs it
//! and reports the result. No generation logic lives here.

pub mod completions;
pub mod config;
pub mod crud;
pub mod init;
pub mod make;
pub mod stubs;

use stubsmith_adapters::{DirectoryStubStore, LayeredStubStore, LocalFilesystem};
use stubsmith_core::application::{GenerationOutcome, Generator};
use tracing::debug;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::TerminalPrompt,
};

/// Wire the production adapters into a [`Generator`] for this invocation.
pub(crate) fn build_generator(
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<Generator> {
    let layout = config.project_layout(global);
    if !layout.root.is_dir() {
        return Err(CliError::RootNotFound { path: layout.root });
    }

    let overrides = config.stubs_dir(global).map(DirectoryStubStore::new);
    debug!(
        root = %layout.root.display(),
        stubs = ?overrides.as_ref().map(|d| d.root().to_path_buf()),
        "Building generator"
    );

    Ok(Generator::new(
        Box::new(LocalFilesystem::new()),
        Box::new(LayeredStubStore::with_overrides(overrides)),
        Box::new(TerminalPrompt::new(global.no_interaction)),
        Box::new(output.clone()),
        layout,
    ))
}

/// Print the run summary (JSON mode only).
pub(crate) fn finish(output: &OutputManager, outcome: &GenerationOutcome) -> CliResult<()> {
    debug!(files = outcome.len(), written = outcome.written().count(), "Command finished");
    output.summary(outcome)?;
    Ok(())
}
