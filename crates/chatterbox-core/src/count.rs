//! The bounded counting sequence.

use std::io::{self, Write};

/// Fixed line emitted after the counting sequence finishes.
pub const CLOSING_LINE: &str = "Completed, have a nice day!";

/// Renders one counting value as its output line.
pub fn render_count(value: u64) -> String {
    format!("{value} !")
}

/// Lazy, finite sequence of integers from 0 up to a bound, inclusive.
///
/// `Clone` the sequence to restart it; iteration consumes nothing until
/// polled. `CountingSequence::new(n)` yields exactly `n + 1` values.
///
/// # Examples
///
/// ```
/// # use chatterbox_core::count::CountingSequence;
/// let values: Vec<u64> = CountingSequence::new(3).collect();
/// assert_eq!(values, vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct CountingSequence {
    next: u64,
    bound: u64,
    done: bool,
}

impl CountingSequence {
    /// Creates a sequence counting from 0 to `bound` inclusive.
    pub fn new(bound: u64) -> Self {
        Self {
            next: 0,
            bound,
            done: false,
        }
    }

    /// The inclusive upper bound of the sequence.
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Writes every value as a `"{value} !"` line followed by the closing
    /// line.
    pub fn emit<W: Write>(self, out: &mut W) -> io::Result<()> {
        for value in self {
            writeln!(out, "{}", render_count(value))?;
        }
        writeln!(out, "{CLOSING_LINE}")
    }
}

impl Iterator for CountingSequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        let value = self.next;
        if value == self.bound {
            // Inclusive bound; u64::MAX would wrap on increment.
            self.done = true;
        } else {
            self.next += 1;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.bound - self.next).saturating_add(1);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CountingSequence {}
