//! Game engines
//!
//! Three independent session types share the [`Session`] shape and borrow a
//! [`Dictionary`](crate::dictionary::Dictionary) when they need one.

pub mod categories;
pub mod letter_set;
mod session;
pub mod wordle;

pub use categories::{CategoryConfig, CategoryGame, CategoryGameState, Puzzle, SubmitOutcome};
pub use letter_set::{LetterSetConfig, LetterSetGame, LetterSetState, Rank, Submission};
pub use session::{GameStatus, Session};
pub use wordle::{WordGame, WordGameConfig, WordGameState};
