//! Core domain types for word games
//!
//! Word normalization and the guess evaluator. Everything here is pure and
//! has no knowledge of game state.

mod verdict;
mod word;

pub use verdict::{LetterStatus, LetterVerdict, Verdict, evaluate};
pub use word::{MIN_WORD_LENGTH, Word, WordError};
