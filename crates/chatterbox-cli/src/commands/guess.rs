//! One-shot age guess from division remainders.

use anyhow::{Context, Result};
use chatterbox_core::Remainders;

use crate::style::{colors::SemanticStyle, print_hint, print_labeled};

pub fn run(r3: i64, r5: i64, r7: i64) -> Result<()> {
    let remainders = Remainders::new(r3, r5, r7)
        .context("Remainders must be valid for their divisors")?;

    let age = remainders.age();

    println!("{}", "Let me guess your age.".bot());
    print_labeled("Remainders (mod 3, 5, 7)", &remainders.to_string());
    print_labeled("Estimated age", &age.to_string());
    print_hint("The formula reconstructs any age from 0 to 104 exactly.");

    Ok(())
}
