use crate::evaluator::limits;
use thiserror::Error;

/// What went wrong, without the offending values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Malformed,
    TooManyThrows,
    TooManySides,
    Overflow,
}

/// Crate Error type, displayed verbatim to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No dice set could be found in the input
    #[error("Invalid dice set received: {0}")]
    Malformed(String),
    #[error("Too many throws, try a number between 1 and {}", limits::MAX_THROWS)]
    TooManyThrows(u64),
    #[error("You're crazy, I'm not going to do that.")]
    TooManySides(u64),
    #[error("Modifier {0} is too large to apply")]
    Overflow(u64),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Malformed(_) => ErrorKind::Malformed,
            Error::TooManyThrows(_) => ErrorKind::TooManyThrows,
            Error::TooManySides(_) => ErrorKind::TooManySides,
            Error::Overflow(_) => ErrorKind::Overflow,
        }
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
