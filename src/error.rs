//! Typed failures for every game operation
//!
//! Engines never panic on player input. Each rejected operation returns a
//! [`GameError`] and leaves the session usable.

use thiserror::Error;

/// Reason an operation was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Guess has {guess} letters but the target has {target}")]
    InvalidLength { guess: usize, target: usize },

    #[error("Not enough letters (need {required}, got {actual})")]
    TooShort { required: usize, actual: usize },

    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),

    #[error("'{0}' is not in the word list")]
    NotInWordList(String),

    #[error("'{0}' was already found")]
    AlreadyFound(String),

    #[error("Missing the center letter '{0}'")]
    MissingRequiredLetter(char),

    #[error("Already {0} words selected")]
    SelectionFull(usize),

    #[error("Select exactly {expected} words (got {actual})")]
    WrongSize { expected: usize, actual: usize },

    #[error("{0}")]
    Rejected(&'static str),

    #[error("Invalid puzzle: {0}")]
    InvalidPuzzle(String),
}

impl GameError {
    /// Stable machine-readable reason code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "InvalidLength",
            Self::TooShort { .. } => "TooShort",
            Self::NotInDictionary(_) => "NotInDictionary",
            Self::NotInWordList(_) => "NotInWordList",
            Self::AlreadyFound(_) => "AlreadyFound",
            Self::MissingRequiredLetter(_) => "MissingRequiredLetter",
            Self::SelectionFull(_) => "SelectionFull",
            Self::WrongSize { .. } => "WrongSize",
            Self::Rejected(_) => "Rejected",
            Self::InvalidPuzzle(_) => "InvalidPuzzle",
        }
    }
}
