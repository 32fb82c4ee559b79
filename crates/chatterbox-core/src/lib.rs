//! # chatterbox-core: the logic behind the Chatterbox console bot
//!
//! This crate contains everything the CLI front-end is not:
//! - The remainder-trick age estimator ([`estimate_age`], [`Remainders`])
//! - The bounded counting sequence ([`CountingSequence`])
//! - Explicit input parsing and validation ([`InputError`])
//! - The scripted chat session engine ([`ChatSession`])
//!
//! All I/O goes through generic `BufRead`/`Write` parameters so the full
//! interaction script can be driven from in-memory buffers in tests.

pub mod age;
pub mod count;
pub mod input;
pub mod session;

pub use age::{estimate_age, Remainders, AGE_MODULUS};
pub use count::{render_count, CountingSequence, CLOSING_LINE};
pub use input::InputError;
pub use session::{BotProfile, ChatSession, SessionError, SessionSummary};
