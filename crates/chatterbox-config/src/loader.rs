//! Layered configuration loading.

use crate::{ChatterboxConfig, Paths};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Assembles the effective configuration from its layered sources.
///
/// Later sources win: built-in defaults, then the user config file, then
/// the project's `chatterbox.toml`, then `CHATTERBOX_*` environment
/// variables. Nested keys use a double underscore in variable names, so
/// `CHATTERBOX_COUNTING__MAX_BOUND=7` overrides `counting.max_bound`.
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
}

impl ConfigLoader {
    /// Starts a loader rooted at the current directory.
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "CHATTERBOX".to_string(),
        }
    }

    /// Overrides the directory searched for `chatterbox.toml`.
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Overrides the environment variable prefix (default: "CHATTERBOX").
    /// Mostly useful for isolating tests from each other.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Merges every source in precedence order and validates the result.
    pub fn load(self) -> Result<ChatterboxConfig> {
        let mut builder = config::Config::builder();

        // Built-in defaults form the base layer
        let defaults = ChatterboxConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // User config (~/.config/chatterbox/config.toml)
        let paths = Paths::new();
        if let Ok(user_config_file) = paths.user_config_file() {
            if user_config_file.exists() {
                builder = builder.add_source(
                    config::File::from(user_config_file)
                        .required(false)
                        .format(config::FileFormat::Toml),
                );
            }
        }

        // Project config (chatterbox.toml)
        let project_config_file = Paths::project_config_file(&self.project_dir);
        if project_config_file.exists() {
            builder = builder.add_source(
                config::File::from(project_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variables win over everything else. The nesting
        // separator is "__" so single underscores inside key names
        // (max_bound, birth_year) survive: CHATTERBOX_COUNTING__MAX_BOUND
        // addresses counting.max_bound.
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let chatterbox_config: ChatterboxConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        chatterbox_config
            .validate()
            .context("Configuration failed validation")?;

        Ok(chatterbox_config)
    }

    /// Like [`ConfigLoader::load`], but falls back to defaults on any error.
    pub fn load_or_default(self) -> ChatterboxConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
