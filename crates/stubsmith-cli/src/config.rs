//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ProjectLayout`]
//! carved out of it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--root`, `--stubs`, `--no-color`; applied at the call-site)
//! 2. Environment variables: `STUBSMITH_STUBS_DIR`, `STUBSMITH_LAYOUT__APP_DIR`, ...
//! 3. Config file: `--config FILE`, else `stubsmith.toml` in the project
//!    root, else the per-user file from [`AppConfig::user_config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stubsmith_core::domain::ProjectLayout;

use crate::cli::GlobalArgs;

/// Name of the per-project configuration file.
pub const LOCAL_CONFIG_FILE: &str = "stubsmith.toml";

const ENV_PREFIX: &str = "STUBSMITH";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Custom stubs, consulted before the builtin set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stubs_dir: Option<PathBuf>,
    /// Directory conventions of the target project.
    pub layout: ProjectLayout,
    /// Output settings.
    pub output: OutputConfig,

    /// File the values were read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration for the project at `root`.
    ///
    /// `config_file` is the path passed via `--config`; it must exist when
    /// given. Otherwise the project file and then the per-user file are
    /// tried, both optional.
    pub fn load(config_file: Option<&Path>, root: &Path) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        let source = match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
                Some(path.to_path_buf())
            }
            None => {
                let local = root.join(LOCAL_CONFIG_FILE);
                let candidate = if local.is_file() {
                    Some(local)
                } else {
                    Self::user_config_path().filter(|p| p.is_file())
                };
                if let Some(path) = &candidate {
                    builder = builder.add_source(File::from(path.as_path()).required(false));
                }
                candidate
            }
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut config: Self = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;
        config.source = source;

        debug!(source = ?config.source, "Configuration loaded");
        Ok(config)
    }

    /// The layout to generate into, with `--root` applied.
    pub fn project_layout(&self, args: &GlobalArgs) -> ProjectLayout {
        let mut layout = self.layout.clone();
        if let Some(root) = &args.root {
            layout.root = root.clone();
        }
        layout
    }

    /// Custom stub directory: `--stubs`, else `stubs_dir`. Relative paths
    /// are taken from the project root.
    pub fn stubs_dir(&self, args: &GlobalArgs) -> Option<PathBuf> {
        let dir = args.stubs.as_ref().or(self.stubs_dir.as_ref())?;
        if dir.is_absolute() {
            Some(dir.clone())
        } else {
            Some(self.project_layout(args).path(dir))
        }
    }

    /// Per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "stubsmith", "stubsmith")
            .map(|d| d.config_dir().join("config.toml"))
    }
}
