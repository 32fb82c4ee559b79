//! The scripted chat session.
//!
//! The bot runs one fixed, linear script: greet, ask for a name, guess the
//! user's age from division remainders, count to a user-chosen bound, say
//! goodbye. The engine is generic over its reader and writer so the whole
//! dialogue can be exercised against in-memory buffers.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::age::Remainders;
use crate::count::CountingSequence;
use crate::input::{self, InputError};

/// Errors that can end a chat session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("I/O error during chat: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before the chat script finished")]
    UnexpectedEof,
}

/// The bot's identity, as printed in the opening lines.
#[derive(Debug, Clone)]
pub struct BotProfile {
    pub name: String,
    pub birth_year: i32,
}

impl Default for BotProfile {
    fn default() -> Self {
        Self {
            name: "Aid".to_string(),
            birth_year: 2022,
        }
    }
}

/// What happened during a completed session, for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub user_name: String,
    pub estimated_age: u8,
    pub count_bound: u64,
}

/// Runs the fixed chat script over a reader/writer pair.
pub struct ChatSession<R, W> {
    input: R,
    output: W,
    bot: BotProfile,
    max_count_bound: u64,
}

impl<R: BufRead, W: Write> ChatSession<R, W> {
    pub fn new(input: R, output: W, bot: BotProfile, max_count_bound: u64) -> Self {
        Self {
            input,
            output,
            bot,
            max_count_bound,
        }
    }

    /// Runs the script from greeting to closing line.
    ///
    /// Malformed input aborts the session with the underlying
    /// [`InputError`]; EOF mid-script becomes
    /// [`SessionError::UnexpectedEof`].
    pub fn run(mut self) -> Result<SessionSummary, SessionError> {
        self.greet()?;
        let user_name = self.ask_name()?;
        let estimated_age = self.guess_age()?;
        let count_bound = self.count_together()?;

        debug!(
            user = %user_name,
            age = estimated_age,
            bound = count_bound,
            "chat session completed"
        );

        Ok(SessionSummary {
            user_name,
            estimated_age,
            count_bound,
        })
    }

    fn greet(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "Hello! My name is {}.", self.bot.name)?;
        writeln!(self.output, "I was created in {}.", self.bot.birth_year)?;
        Ok(())
    }

    fn ask_name(&mut self) -> Result<String, SessionError> {
        writeln!(self.output, "Please, remind me your name.")?;
        let name = input::parse_name(&self.read_line()?)?;
        writeln!(self.output, "What a great name you have, {name}!")?;
        Ok(name)
    }

    fn guess_age(&mut self) -> Result<u8, SessionError> {
        writeln!(self.output, "Let me guess your age.")?;
        writeln!(
            self.output,
            "Enter remainders of dividing your age by 3, 5 and 7."
        )?;

        let r3 = input::parse_remainder("remainder of division by 3", &self.read_line()?, 3)?;
        let r5 = input::parse_remainder("remainder of division by 5", &self.read_line()?, 5)?;
        let r7 = input::parse_remainder("remainder of division by 7", &self.read_line()?, 7)?;

        let age = Remainders::new(r3, r5, r7)?.age();
        writeln!(
            self.output,
            "Your age is {age}; that's a good time to start programming!"
        )?;
        Ok(age)
    }

    fn count_together(&mut self) -> Result<u64, SessionError> {
        writeln!(
            self.output,
            "Now I will prove to you that I can count to any number you want."
        )?;
        let bound = input::parse_count_bound(&self.read_line()?, self.max_count_bound)?;
        CountingSequence::new(bound).emit(&mut self.output)?;
        Ok(bound)
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        self.output.flush()?;
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Err(SessionError::UnexpectedEof),
            _ => Ok(line),
        }
    }
}
