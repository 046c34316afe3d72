//! `stubsmith config`: inspect the effective configuration.

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(config)
                .with_cli_context(|| "Failed to serialise config")?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => match &config.source {
            Some(path) => output.print(&path.display().to_string())?,
            None => {
                output.info("No configuration file in use, built-in defaults apply")?;
                if let Some(user) = AppConfig::user_config_path() {
                    output.print(&format!("User configuration: {}", user.display()))?;
                }
            }
        },
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `layout.kinds.model`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let root = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let value = key
        .split('.')
        .try_fold(&root, |node, part| node.get(part))
        .ok_or_else(|| CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        })?;

    Ok(match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
