use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every fatal condition of a hangman invocation.
///
/// Recoverable interactive mistakes (a typo, a letter typed twice) never
/// surface here; they become a message on the next frame instead.
#[derive(Error, Debug)]
pub enum HangmanError {
    #[error("failed to read word list '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read guess input: {0}")]
    ReadInput(#[source] io::Error),
    #[error("malformed word list line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("word list contains no words")]
    EmptyWordPool,
    #[error("cannot build word distribution: {0}")]
    Selection(String),
    #[error("guesser returned an invalid guess: {0:?}")]
    InvalidGuess(String),
    #[error("guesser returned a letter that has already been attempted: {0}")]
    RepeatedGuess(char),
}

impl HangmanError {
    /// True for errors caused by a guessing function breaking its contract.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidGuess(_) | Self::RepeatedGuess(_))
    }
}
