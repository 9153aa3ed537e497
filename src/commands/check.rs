//! One-shot guess evaluation
//!
//! Scores a guess against a known target without starting a game.

use crate::core::{Verdict, Word, evaluate};
use crate::dictionary::Dictionary;
use crate::error::GameError;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: String,
    pub target: String,
    pub verdict: Verdict,
    /// Whether the guess would be accepted in a game
    pub in_dictionary: bool,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// - [`GameError::Rejected`] if either word is not a plain word (letters only, at least two)
/// - [`GameError::InvalidLength`] if the words differ in length
pub fn check_guess(
    guess: &str,
    target: &str,
    dictionary: &dyn Dictionary,
) -> Result<CheckResult, GameError> {
    let guess =
        Word::new(guess).map_err(|_| GameError::Rejected("the guess must be a plain word"))?;
    let target =
        Word::new(target).map_err(|_| GameError::Rejected("the target must be a plain word"))?;

    let verdict = evaluate(guess.text(), target.text())?;
    let in_dictionary = dictionary.is_valid(guess.text());

    Ok(CheckResult {
        guess: guess.into_string(),
        target: target.into_string(),
        verdict,
        in_dictionary,
    })
}
