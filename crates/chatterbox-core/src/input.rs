//! Explicit parsing and validation of user input.
//!
//! The bot reads everything as lines of text. Rather than coercing text to
//! numbers implicitly, every read goes through one of these parse helpers
//! and malformed input fails with a typed error.

use thiserror::Error;

/// Errors produced while parsing or validating a line of user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The text was not a whole number at all.
    #[error("invalid input format: expected a whole number, got {input:?}")]
    InvalidFormat { input: String },

    /// A numeric value fell outside its allowed range.
    #[error("{label} must be between 0 and {max}, got {value}")]
    OutOfRange {
        label: &'static str,
        value: i64,
        max: i64,
    },

    /// The counting bound was negative.
    #[error("counting bound must be non-negative, got {0}")]
    NegativeBound(i64),

    /// The counting bound exceeded the configured cap.
    #[error("counting bound {value} exceeds the maximum of {max}")]
    BoundTooLarge { value: u64, max: u64 },

    /// The name line was empty after trimming.
    #[error("name must not be empty")]
    EmptyName,
}

/// Parses a line as a whole number.
pub fn parse_integer(line: &str) -> Result<i64, InputError> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| InputError::InvalidFormat {
        input: trimmed.to_string(),
    })
}

/// Parses a remainder line and checks it against its divisor range.
pub fn parse_remainder(
    label: &'static str,
    line: &str,
    divisor: i64,
) -> Result<i64, InputError> {
    let value = parse_integer(line)?;
    if (0..divisor).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange {
            label,
            value,
            max: divisor - 1,
        })
    }
}

/// Parses a counting bound: non-negative and at most `max`.
pub fn parse_count_bound(line: &str, max: u64) -> Result<u64, InputError> {
    let value = parse_integer(line)?;
    if value < 0 {
        return Err(InputError::NegativeBound(value));
    }
    #[allow(clippy::cast_sign_loss)]
    let value = value as u64;
    if value > max {
        return Err(InputError::BoundTooLarge { value, max });
    }
    Ok(value)
}

/// Trims a name line and rejects empty input.
pub fn parse_name(line: &str) -> Result<String, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Err(InputError::EmptyName)
    } else {
        Ok(trimmed.to_string())
    }
}
