//! Configuration management commands.

use anyhow::{bail, Context, Result};
use chatterbox_config::ConfigLoader;

use crate::style::{colors::SemanticStyle, print_labeled, print_spacer};

/// Show the effective configuration.
pub fn show(format: &str) -> Result<()> {
    let config = ConfigLoader::new()
        .load()
        .context("Failed to load configuration")?;

    match format {
        "toml" => {
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{toml_str}");
        }
        "text" => {
            println!("{}", "Chatterbox Configuration".header());
            print_spacer();

            println!("Bot:");
            print_labeled("Name", &config.bot.name);
            print_labeled("Birth year", &config.bot.birth_year.to_string());
            print_spacer();

            println!("Counting:");
            print_labeled("Max bound", &config.counting.max_bound.to_string());
        }
        other => bail!("Unknown format {other:?}. Supported formats: text, toml."),
    }

    Ok(())
}
