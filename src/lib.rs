//! Wordplay
//!
//! Word puzzle engines: a Wordle evaluator and game, a Spelling Bee style
//! letter set game and a Connections style category game, all sharing one
//! dictionary provider.
//!
//! # Quick Start
//!
//! ```rust
//! use wordplay::core::{LetterStatus, evaluate};
//! use wordplay::dictionary::WordList;
//! use wordplay::games::{Session, WordGame, WordGameConfig};
//!
//! // Score one guess
//! let verdict = evaluate("crane", "slate").unwrap();
//! assert_eq!(verdict.to_emoji(), "⬜⬜🟩⬜🟩");
//!
//! // Play a game against a known target
//! let dictionary = WordList::embedded();
//! let mut game = WordGame::with_target(&dictionary, "slate", WordGameConfig::default()).unwrap();
//! game.submit_word("crane").unwrap();
//! assert_eq!(game.attempts_left(), 5);
//! assert_eq!(game.letter_states()[&'A'], LetterStatus::Correct);
//! assert!(!game.is_over());
//! ```

// Core domain types
pub mod core;

// Error types shared by the games
pub mod error;

// Word lists and the shared dictionary
pub mod dictionary;

// Game engines
pub mod games;

// Persistent statistics
pub mod progress;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
