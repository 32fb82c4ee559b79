//! Counting command.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chatterbox_config::ConfigLoader;
use chatterbox_core::{CountingSequence, InputError};

pub fn run(bound: u64) -> Result<()> {
    let config = ConfigLoader::new()
        .load()
        .context("Failed to load configuration")?;

    let max = config.counting.max_bound;
    if bound > max {
        return Err(InputError::BoundTooLarge { value: bound, max })
            .context("Refusing to count that far");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    CountingSequence::new(bound)
        .emit(&mut out)
        .context("Failed to write counting sequence")?;
    out.flush()?;

    Ok(())
}
