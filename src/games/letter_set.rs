//! Spelling-Bee-style letter set game
//!
//! A puzzle is one required (center) letter plus a ring of other letters.
//! Valid words are at least four letters long, use the center letter and use
//! nothing outside the puzzle's letters. The set of valid words is computed
//! once when the puzzle is created.

use super::session::{GameStatus, Session};
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::GameError;
use log::{debug, info};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Letters used when the dictionary has no word with enough distinct letters
pub const DEFAULT_REQUIRED_LETTER: char = 'A';
pub const DEFAULT_AVAILABLE_LETTERS: [char; 6] = ['C', 'E', 'I', 'N', 'R', 'T'];

/// Puzzle size and scoring rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSetConfig {
    /// Distinct letters in a puzzle, center letter included
    pub alphabet_size: usize,
    pub min_word_length: usize,
    /// Extra points for a word that uses every puzzle letter
    pub pangram_bonus: u32,
}

impl Default for LetterSetConfig {
    fn default() -> Self {
        Self {
            alphabet_size: 7,
            min_word_length: 4,
            pangram_bonus: 7,
        }
    }
}

/// A named progress tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rank {
    pub name: &'static str,
    /// Fraction of the maximum score needed to reach this rank
    pub threshold: f64,
}

/// Ranks in ascending order of threshold
pub const RANKS: &[Rank] = &[
    Rank { name: "Beginner", threshold: 0.0 },
    Rank { name: "Good Start", threshold: 0.02 },
    Rank { name: "Moving Up", threshold: 0.05 },
    Rank { name: "Good", threshold: 0.08 },
    Rank { name: "Solid", threshold: 0.15 },
    Rank { name: "Nice", threshold: 0.25 },
    Rank { name: "Great", threshold: 0.40 },
    Rank { name: "Amazing", threshold: 0.50 },
    Rank { name: "Genius", threshold: 0.70 },
    Rank { name: "Queen Bee", threshold: 1.0 },
];

/// Highest rank reached with `score` out of `max_score`
#[must_use]
pub fn rank_for(score: u32, max_score: u32) -> &'static Rank {
    let ratio = if max_score == 0 {
        0.0
    } else {
        f64::from(score) / f64::from(max_score)
    };

    RANKS
        .iter()
        .rev()
        .find(|rank| ratio >= rank.threshold)
        .unwrap_or(&RANKS[0])
}

/// Position of a rank name in [`RANKS`]
#[must_use]
pub fn rank_index(name: &str) -> Option<usize> {
    RANKS.iter().position(|rank| rank.name == name)
}

/// An accepted word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub word: String,
    pub score: u32,
    pub is_pangram: bool,
}

/// Snapshot of a [`LetterSetGame`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterSetState {
    pub required_letter: char,
    pub available_letters: Vec<char>,
    pub valid_words: Vec<String>,
    pub found_words: Vec<String>,
    pub score: u32,
    pub max_score: u32,
    pub rank: &'static str,
    pub status: GameStatus,
}

/// A single letter set session
#[derive(Debug, Clone)]
pub struct LetterSetGame {
    config: LetterSetConfig,
    required: char,
    available: Vec<char>,
    valid_words: FxHashSet<String>,
    max_score: u32,
    found: Vec<String>,
    score: u32,
    status: GameStatus,
}

impl LetterSetGame {
    /// Generate a puzzle from the dictionary
    ///
    /// A random word with exactly `alphabet_size` distinct letters seeds the
    /// puzzle and one of its letters becomes the center. Without such a word
    /// the default letters are used.
    ///
    /// # Errors
    /// - [`GameError::Rejected`] if the dictionary is still loading
    /// - [`GameError::InvalidPuzzle`] if `alphabet_size` is zero
    pub fn new<R: Rng + ?Sized>(
        dictionary: &dyn Dictionary,
        config: LetterSetConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if !dictionary.is_ready() {
            return Err(GameError::Rejected("the dictionary is still loading"));
        }
        if config.alphabet_size == 0 {
            return Err(GameError::InvalidPuzzle(
                "a puzzle needs at least one letter".to_string(),
            ));
        }

        let seeds = pangram_seeds(dictionary, config.alphabet_size);

        let Some(seed) = seeds.choose(rng) else {
            info!(
                "No word with {} distinct letters, using default letters",
                config.alphabet_size
            );
            return Self::with_letters(
                dictionary,
                DEFAULT_REQUIRED_LETTER,
                &DEFAULT_AVAILABLE_LETTERS,
                config,
            );
        };

        let mut letters: Vec<char> = seed.chars().collect();
        letters.sort_unstable();
        letters.dedup();

        let required = *letters.choose(rng).unwrap_or(&DEFAULT_REQUIRED_LETTER);
        let mut available: Vec<char> = letters.into_iter().filter(|&c| c != required).collect();
        available.shuffle(rng);

        debug!("Seeded letter set from {seed} with center {required}");
        Self::with_letters(dictionary, required, &available, config)
    }

    /// Build a puzzle from explicit letters
    ///
    /// The word universe is taken from the dictionary once, here.
    ///
    /// # Errors
    /// - [`GameError::Rejected`] if the dictionary is still loading
    /// - [`GameError::InvalidPuzzle`] if any letter is not an ASCII letter,
    ///   letters repeat, or the center letter also appears in `available`
    pub fn with_letters(
        dictionary: &dyn Dictionary,
        required: char,
        available: &[char],
        config: LetterSetConfig,
    ) -> Result<Self, GameError> {
        if !dictionary.is_ready() {
            return Err(GameError::Rejected("the dictionary is still loading"));
        }

        let required = required.to_ascii_uppercase();
        let available: Vec<char> = available.iter().map(char::to_ascii_uppercase).collect();

        if !required.is_ascii_alphabetic() || !available.iter().all(char::is_ascii_alphabetic) {
            return Err(GameError::InvalidPuzzle(
                "puzzle letters must be A-Z".to_string(),
            ));
        }

        let mut closure: FxHashSet<char> = available.iter().copied().collect();
        if closure.len() != available.len() {
            return Err(GameError::InvalidPuzzle("letters repeat".to_string()));
        }
        if !closure.insert(required) {
            return Err(GameError::InvalidPuzzle(format!(
                "center letter {required} is also in the ring"
            )));
        }

        let valid_words: FxHashSet<String> = dictionary
            .all_words()
            .into_par_iter()
            .filter(|word| {
                word.len() >= config.min_word_length
                    && word.contains(required)
                    && word.chars().all(|c| closure.contains(&c))
            })
            .collect();

        let closure_size = closure.len();
        let max_score = valid_words
            .iter()
            .map(|w| score_word(w, closure_size, &config).0)
            .sum();

        debug!(
            "Letter set {required}/{}: {} valid words, {max_score} points",
            available.iter().collect::<String>(),
            valid_words.len()
        );

        Ok(Self {
            config,
            required,
            available,
            valid_words,
            max_score,
            found: Vec::new(),
            score: 0,
            status: GameStatus::InProgress,
        })
    }

    /// Try a word
    ///
    /// # Errors
    /// Checked in this order:
    /// - [`GameError::Rejected`] if every word has already been found
    /// - [`GameError::TooShort`] below the minimum length
    /// - [`GameError::MissingRequiredLetter`] without the center letter
    /// - [`GameError::AlreadyFound`] on a repeat
    /// - [`GameError::NotInWordList`] if the word is not a valid answer,
    ///   including any word with letters outside the puzzle
    pub fn submit_word(&mut self, word: &str) -> Result<Submission, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::Rejected("every word has been found"));
        }

        let word = word.trim().to_ascii_uppercase();

        if word.chars().count() < self.config.min_word_length {
            return Err(GameError::TooShort {
                required: self.config.min_word_length,
                actual: word.chars().count(),
            });
        }
        if !word.contains(self.required) {
            return Err(GameError::MissingRequiredLetter(self.required));
        }
        if self.found.contains(&word) {
            return Err(GameError::AlreadyFound(word));
        }
        if !self.valid_words.contains(&word) {
            return Err(GameError::NotInWordList(word));
        }

        let (score, is_pangram) = score_word(&word, self.letter_count(), &self.config);
        self.score += score;
        self.found.push(word.clone());

        if self.found.len() == self.valid_words.len() {
            info!("All {} words found", self.found.len());
            self.status = GameStatus::Won;
        }

        Ok(Submission {
            word,
            score,
            is_pangram,
        })
    }

    /// Reorder the ring letters for display
    pub fn shuffle_letters<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.available.shuffle(rng);
    }

    #[must_use]
    pub const fn required_letter(&self) -> char {
        self.required
    }

    #[must_use]
    pub fn available_letters(&self) -> &[char] {
        &self.available
    }

    /// Whether `c` may appear in a valid word
    #[must_use]
    pub fn allows(&self, c: char) -> bool {
        let c = c.to_ascii_uppercase();
        c == self.required || self.available.contains(&c)
    }

    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    #[must_use]
    pub fn valid_word_count(&self) -> usize {
        self.valid_words.len()
    }

    #[must_use]
    pub fn remaining_words(&self) -> usize {
        self.valid_words.len() - self.found.len()
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Every valid word that uses all puzzle letters, sorted
    #[must_use]
    pub fn pangrams(&self) -> Vec<String> {
        let closure_size = self.letter_count();
        let mut pangrams: Vec<String> = self
            .valid_words
            .iter()
            .filter(|w| score_word(w, closure_size, &self.config).1)
            .cloned()
            .collect();
        pangrams.sort_unstable();
        pangrams
    }

    #[must_use]
    pub fn rank(&self) -> &'static Rank {
        rank_for(self.score, self.max_score)
    }

    /// Points still needed for the next rank, `None` at the top
    #[must_use]
    pub fn points_to_next_rank(&self) -> Option<u32> {
        let current = rank_index(self.rank().name)?;
        let next = RANKS.get(current + 1)?;
        let needed = (next.threshold * f64::from(self.max_score)).ceil() as u32;
        Some(needed.saturating_sub(self.score).max(1))
    }

    fn letter_count(&self) -> usize {
        self.available.len() + 1
    }
}

impl Session for LetterSetGame {
    type State = LetterSetState;

    fn state(&self) -> LetterSetState {
        let mut valid_words: Vec<String> = self.valid_words.iter().cloned().collect();
        valid_words.sort_unstable();

        LetterSetState {
            required_letter: self.required,
            available_letters: self.available.clone(),
            valid_words,
            found_words: self.found.clone(),
            score: self.score,
            max_score: self.max_score,
            rank: self.rank().name,
            status: self.status,
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }
}

/// Dictionary words with exactly `distinct` different letters, sorted
#[must_use]
pub fn pangram_seeds(dictionary: &dyn Dictionary, distinct: usize) -> Vec<String> {
    dictionary
        .all_words()
        .into_iter()
        .filter(|w| Word::new(w).is_ok_and(|w| w.distinct_letters().len() == distinct))
        .collect()
}

/// Score a valid word; returns (points, is pangram)
///
/// `closure_size` is the number of distinct puzzle letters. The word is
/// assumed to use only puzzle letters.
fn score_word(word: &str, closure_size: usize, config: &LetterSetConfig) -> (u32, bool) {
    let len = word.chars().count();
    let distinct: FxHashSet<char> = word.chars().collect();
    let is_pangram = distinct.len() == closure_size;

    let base = if len <= config.min_word_length {
        1
    } else {
        len as u32
    };
    let bonus = if is_pangram { config.pangram_bonus } else { 0 };

    (base + bonus, is_pangram)
}
