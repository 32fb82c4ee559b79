//! Configuration management for Chatterbox
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (`CHATTERBOX_*` prefix, highest precedence;
//!    nested keys use `__`, e.g. `CHATTERBOX_COUNTING__MAX_BOUND`)
//! 2. chatterbox.toml (project config in the working directory)
//! 3. ~/.config/chatterbox/config.toml (user defaults)
//! 4. Built-in defaults (lowest precedence)

use serde::{Deserialize, Serialize};

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main Chatterbox configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatterboxConfig {
    pub bot: BotConfig,
    pub counting: CountingConfig,
}

/// The bot's identity as announced in its greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub name: String,
    pub birth_year: i32,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "Aid".to_string(),
            birth_year: 2022,
        }
    }
}

/// Limits on the counting stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CountingConfig {
    /// Maximum user-supplied counting bound. Keeps a stray input from
    /// flooding the terminal with millions of lines.
    pub max_bound: u64,
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self { max_bound: 10_000 }
    }
}

impl ChatterboxConfig {
    /// Validates cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "bot.name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
