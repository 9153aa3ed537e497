//! Guess evaluation and per-letter feedback
//!
//! A verdict classifies every letter of a guess against a fixed target:
//! - Correct: right letter, right position
//! - Present: letter occurs elsewhere in the target
//! - Absent: letter not in the target (or every occurrence already claimed)

use crate::error::GameError;
use serde::Serialize;
use std::fmt;

/// Feedback for a single letter
///
/// Ordered so that `max` keeps the most informative status seen for a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// A letter of the guess together with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LetterVerdict {
    pub letter: char,
    pub status: LetterStatus,
}

/// Feedback for a whole guess, one entry per target position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Verdict(Vec<LetterVerdict>);

impl Verdict {
    /// Per-letter feedback in guess order
    #[must_use]
    pub fn letters(&self) -> &[LetterVerdict] {
        &self.0
    }

    /// Just the statuses, in guess order
    #[must_use]
    pub fn statuses(&self) -> Vec<LetterStatus> {
        self.0.iter().map(|lv| lv.status).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every letter is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|lv| lv.status == LetterStatus::Correct)
    }

    /// Convert the verdict to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|lv| lv.status.emoji()).collect()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lv in &self.0 {
            write!(f, "{}", lv.letter)?;
        }
        Ok(())
    }
}

/// Evaluate `guess` against `target`
///
/// Letters are compared case-insensitively and reported uppercase.
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and consume those
///    target positions
/// 2. Second pass: for each unmarked guess letter, claim the leftmost
///    unconsumed target position holding the same letter (Present),
///    otherwise Absent
///
/// A letter that occurs once in the target therefore earns at most one
/// Correct/Present across the whole guess.
///
/// # Errors
/// Returns [`GameError::InvalidLength`] if the two words differ in length.
///
/// # Examples
/// ```
/// use wordplay::core::{evaluate, LetterStatus};
///
/// let verdict = evaluate("robot", "floor").unwrap();
/// assert_eq!(
///     verdict.statuses(),
///     vec![
///         LetterStatus::Present,
///         LetterStatus::Present,
///         LetterStatus::Absent,
///         LetterStatus::Correct,
///         LetterStatus::Absent,
///     ]
/// );
/// ```
pub fn evaluate(guess: &str, target: &str) -> Result<Verdict, GameError> {
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    let target: Vec<char> = target.chars().map(|c| c.to_ascii_uppercase()).collect();

    if guess.len() != target.len() {
        return Err(GameError::InvalidLength {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let mut statuses: Vec<Option<LetterStatus>> = vec![None; guess.len()];
    let mut consumed = vec![false; target.len()];

    // First pass: exact matches
    for (i, (&g, &t)) in guess.iter().zip(&target).enumerate() {
        if g == t {
            statuses[i] = Some(LetterStatus::Correct);
            consumed[i] = true;
        }
    }

    // Second pass: leftmost unconsumed occurrence elsewhere
    for (i, &g) in guess.iter().enumerate() {
        if statuses[i].is_some() {
            continue;
        }

        let claim = target
            .iter()
            .enumerate()
            .find(|&(j, &t)| !consumed[j] && t == g)
            .map(|(j, _)| j);

        statuses[i] = Some(match claim {
            Some(j) => {
                consumed[j] = true;
                LetterStatus::Present
            }
            None => LetterStatus::Absent,
        });
    }

    Ok(Verdict(
        guess
            .into_iter()
            .zip(statuses)
            .map(|(letter, status)| LetterVerdict {
                letter,
                status: status.unwrap_or(LetterStatus::Absent),
            })
            .collect(),
    ))
}
