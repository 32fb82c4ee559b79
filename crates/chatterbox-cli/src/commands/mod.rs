//! CLI command implementations.

pub mod chat;
pub mod config;
pub mod count;
pub mod guess;
pub mod version;
