//! `stubsmith stubs`: list the stub set, or publish the builtins for editing.

use std::{collections::BTreeSet, fs, path::PathBuf};

use serde_json::json;
use tracing::{debug, info, instrument};

use stubsmith_adapters::{BuiltinStubStore, DirectoryStubStore, LayeredStubStore};
use stubsmith_core::{application::ports::StubStore, domain::StubName};

use crate::{
    cli::{GlobalArgs, StubsArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

const DEFAULT_PUBLISH_DIR: &str = "stubs";

#[instrument(skip_all, fields(publish = args.publish))]
pub fn execute(
    args: StubsArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    if args.publish {
        publish(args.force, global, config, output)
    } else {
        list(global, config, output)
    }
}

fn list(global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let overrides = config.stubs_dir(global).map(DirectoryStubStore::new);
    let custom: BTreeSet<StubName> = match &overrides {
        Some(dir) => dir.list()?.into_iter().collect(),
        None => BTreeSet::new(),
    };
    let names = LayeredStubStore::with_overrides(overrides).list()?;

    if output.is_json() {
        let stubs: Vec<_> = names
            .iter()
            .map(|name| {
                json!({
                    "name": name.as_str(),
                    "source": if custom.contains(name) { "custom" } else { "builtin" },
                })
            })
            .collect();
        output.print(&json!({ "stubs": stubs }).to_string())?;
        return Ok(());
    }

    output.header("Available stubs:")?;
    for name in &names {
        if custom.contains(name) {
            output.print(&format!("  {name} (custom)"))?;
        } else {
            output.print(&format!("  {name}"))?;
        }
    }
    Ok(())
}

fn publish(
    force: bool,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let target = publish_dir(global, config);
    let store = DirectoryStubStore::new(&target);
    info!(dir = %target.display(), "Publishing builtin stubs");

    let mut published = 0usize;
    for (name, content) in BuiltinStubStore::entries() {
        let name = StubName::new(name).map_err(stubsmith_core::error::StubsmithError::from)?;
        let path = store.path_of(&name);

        if path.exists() && !force {
            debug!(path = %path.display(), "Already published, keeping");
            output.warning(&format!("Kept existing {}", path.display()))?;
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_cli_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content)
            .with_cli_context(|| format!("Failed to write {}", path.display()))?;
        published += 1;
    }

    output.success(&format!(
        "Published {published} stub(s) to {}",
        target.display()
    ))?;
    Ok(())
}

/// `--stubs` / `stubs_dir`, else `<root>/stubs`.
fn publish_dir(global: &GlobalArgs, config: &AppConfig) -> PathBuf {
    config
        .stubs_dir(global)
        .unwrap_or_else(|| config.project_layout(global).path(DEFAULT_PUBLISH_DIR))
}
