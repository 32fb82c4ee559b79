//! Interactive chat command.

use std::io;

use anyhow::{Context, Result};
use chatterbox_config::ConfigLoader;
use chatterbox_core::{BotProfile, ChatSession};
use tracing::info;

use crate::style::banner::print_banner;

pub fn run(plain: bool) -> Result<()> {
    let config = ConfigLoader::new()
        .load()
        .context("Failed to load configuration")?;

    if !plain {
        print_banner();
    }

    let bot = BotProfile {
        name: config.bot.name,
        birth_year: config.bot.birth_year,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = ChatSession::new(
        stdin.lock(),
        stdout.lock(),
        bot,
        config.counting.max_bound,
    );

    let summary = session.run().context("Chat session ended early")?;
    info!(
        user = %summary.user_name,
        age = summary.estimated_age,
        bound = summary.count_bound,
        "chat finished"
    );

    Ok(())
}
