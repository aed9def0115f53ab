//! Error type shared by configuration, generation and output.

use std::io;

use thiserror::Error;

use crate::exits;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown character kind: {0}")]
    UnknownClass(String),

    #[error("Length of password must be positive")]
    NonPositiveLength,

    #[error("Number of passwords must be positive")]
    NonPositiveCount,

    #[error("Cannot work with empty candidates")]
    EmptyCandidates,

    #[error("Cannot allocate a password of {0} characters")]
    TooLong(usize),

    #[error("Secure random source failed: {0}")]
    Entropy(#[source] io::Error),

    #[error("Failed to write passwords: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UnknownClass(_) | Error::NonPositiveLength | Error::NonPositiveCount => {
                exits::INVALID_CONFIG
            }
            Error::EmptyCandidates
            | Error::TooLong(_)
            | Error::Entropy(_)
            | Error::Output(_) => exits::FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
