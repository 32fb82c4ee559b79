//! Version command implementation.

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = "chatterbox";

pub fn run() {
    println!("{NAME} {VERSION}");
    println!();
    println!("A console chatbot that greets, guesses ages, and counts.");
    println!();
    println!("Build info:");
    println!("  Target: {}", std::env::consts::ARCH);
    println!("  OS:     {}", std::env::consts::OS);
}
