//! `stubsmith init`: write a default configuration file.

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create `stubsmith.toml` in the project root, or the per-user file with
/// `--global`.
pub fn execute(
    args: InitArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let config_path = target_path(&args, global, config)?;

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default())
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    info!(path = %config_path.display(), "Configuration written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn target_path(args: &InitArgs, global: &GlobalArgs, config: &AppConfig) -> CliResult<PathBuf> {
    if args.global {
        return AppConfig::user_config_path().ok_or_else(|| CliError::ConfigError {
            message: "No home directory, cannot locate the user configuration".into(),
            source: None,
        });
    }
    Ok(config.project_layout(global).path(LOCAL_CONFIG_FILE))
}
