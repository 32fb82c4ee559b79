//! Startup banner for the chat session.

use super::colors::SemanticStyle;

const BANNER: &str = r"
  ● C H A T T E R B O X
";

/// Prints the full banner with styling.
pub fn print_banner() {
    println!("{}", BANNER.bot());
    println!("  {}", "Your tiny console companion".muted());
    println!();
}
