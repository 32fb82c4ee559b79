//! Chatterbox unified CLI.
//!
//! A small console chatbot that greets you, guesses your age from division
//! remainders, and counts to any number you want.
//!
//! # Quick Start
//!
//! ```bash
//! # Run the full interactive chat
//! chatterbox chat
//!
//! # One-shot age guess from remainders mod 3, 5, 7
//! chatterbox guess 1 2 1
//!
//! # Count from 0 to 5
//! chatterbox count 5
//! ```

mod commands;
mod style;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Chatterbox - a console chatbot that greets, guesses ages, and counts.
#[derive(Parser)]
#[command(name = "chatterbox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full interactive chat session.
    Chat {
        /// Skip the startup banner.
        #[arg(long)]
        plain: bool,
    },

    /// Guess an age from the remainders of division by 3, 5 and 7.
    Guess {
        /// Remainder of dividing the age by 3 (0-2).
        r3: i64,

        /// Remainder of dividing the age by 5 (0-4).
        r5: i64,

        /// Remainder of dividing the age by 7 (0-6).
        r7: i64,
    },

    /// Count from 0 up to a bound, inclusive.
    Count {
        /// Upper bound of the counting sequence (inclusive).
        bound: u64,
    },

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show version information.
    Version,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Output format (text, toml).
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    style::set_no_color(cli.no_color);

    match cli.command {
        Commands::Chat { plain } => commands::chat::run(plain),
        Commands::Guess { r3, r5, r7 } => commands::guess::run(r3, r5, r7),
        Commands::Count { bound } => commands::count::run(bound),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format } => commands::config::show(&format),
        },
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
