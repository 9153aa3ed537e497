//! Wordle-style guessing game
//!
//! The player types letters into an input buffer and submits complete
//! guesses against a hidden target. Each accepted guess returns a
//! [`Verdict`]; the session ends on a correct guess or when the attempt
//! budget runs out.

use super::session::{GameStatus, Session};
use crate::core::{LetterStatus, Verdict, Word, evaluate};
use crate::dictionary::{ANSWERS, Dictionary, loader::words_from_slice};
use crate::error::GameError;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use std::collections::BTreeMap;

/// Word length and attempt budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordGameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
}

impl Default for WordGameConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_attempts: 6,
        }
    }
}

/// Snapshot of a [`WordGame`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordGameState {
    pub target: String,
    pub guesses: Vec<String>,
    pub verdicts: Vec<Verdict>,
    pub current_input: String,
    pub status: GameStatus,
    pub max_attempts: usize,
}

/// A single Wordle session
pub struct WordGame<'a> {
    dictionary: &'a dyn Dictionary,
    config: WordGameConfig,
    target: String,
    guesses: Vec<String>,
    verdicts: Vec<Verdict>,
    input: String,
    status: GameStatus,
}

impl<'a> WordGame<'a> {
    /// Start a game with a target drawn from the dictionary
    ///
    /// Targets come from dictionary words of `config.word_length` letters.
    /// If the dictionary has none (for example, it is still loading) the
    /// embedded answer list is used instead.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidPuzzle`] if no word of the requested
    /// length exists anywhere, or the attempt budget is zero.
    pub fn new<R: Rng + ?Sized>(
        dictionary: &'a dyn Dictionary,
        config: WordGameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut candidates = dictionary.words_of_length(config.word_length);
        if candidates.is_empty() {
            debug!(
                "No {}-letter words loaded, drawing from embedded answers",
                config.word_length
            );
            candidates = words_from_slice(ANSWERS)
                .into_iter()
                .filter(|w| w.len() == config.word_length)
                .map(Word::into_string)
                .collect();
        }

        let target = candidates.choose(rng).cloned().ok_or_else(|| {
            GameError::InvalidPuzzle(format!("no {}-letter words available", config.word_length))
        })?;

        Self::with_target(dictionary, &target, config)
    }

    /// Start a game with a known target
    ///
    /// The word length is taken from the target.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidPuzzle`] if the target is not a plain
    /// word, or the attempt budget is zero.
    pub fn with_target(
        dictionary: &'a dyn Dictionary,
        target: &str,
        config: WordGameConfig,
    ) -> Result<Self, GameError> {
        let target = Word::new(target).map_err(|e| GameError::InvalidPuzzle(e.to_string()))?;

        if config.max_attempts == 0 {
            return Err(GameError::InvalidPuzzle(
                "attempt budget must be at least 1".to_string(),
            ));
        }

        let config = WordGameConfig {
            word_length: target.len(),
            ..config
        };

        debug!("New word game: {} letters, {} attempts", config.word_length, config.max_attempts);

        Ok(Self {
            dictionary,
            config,
            target: target.into_string(),
            guesses: Vec::with_capacity(config.max_attempts),
            verdicts: Vec::with_capacity(config.max_attempts),
            input: String::with_capacity(config.word_length),
            status: GameStatus::InProgress,
        })
    }

    /// Add a letter to the input buffer
    ///
    /// # Errors
    /// [`GameError::Rejected`] if the game is over, the buffer is full or
    /// `c` is not an ASCII letter.
    pub fn append_char(&mut self, c: char) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::Rejected("the game is over"));
        }
        if self.input.len() >= self.config.word_length {
            return Err(GameError::Rejected("the row is full"));
        }
        if !c.is_ascii_alphabetic() {
            return Err(GameError::Rejected("only letters are allowed"));
        }

        self.input.push(c.to_ascii_uppercase());
        Ok(())
    }

    /// Remove the last letter from the input buffer
    ///
    /// Returns false (and changes nothing) when the buffer is empty or the
    /// game is over.
    pub fn delete_char(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.input.pop().is_some()
    }

    /// Submit the input buffer as a guess
    ///
    /// On success the buffer is cleared and the verdict returned. On failure
    /// nothing changes and the buffer is kept for editing.
    ///
    /// # Errors
    /// - [`GameError::Rejected`] if the game is over
    /// - [`GameError::TooShort`] if the buffer is not exactly target length
    /// - [`GameError::NotInDictionary`] if the (ready) dictionary does not
    ///   know the word
    pub fn submit(&mut self) -> Result<Verdict, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::Rejected("the game is over"));
        }
        if self.input.len() != self.config.word_length {
            return Err(GameError::TooShort {
                required: self.config.word_length,
                actual: self.input.len(),
            });
        }
        if self.input != self.target && !self.dictionary.is_valid(&self.input) {
            return Err(GameError::NotInDictionary(self.input.clone()));
        }

        let guess = std::mem::take(&mut self.input);
        let verdict = evaluate(&guess, &self.target)?;

        let won = guess == self.target;
        self.guesses.push(guess);
        self.verdicts.push(verdict.clone());

        if won {
            self.status = GameStatus::Won;
        } else if self.guesses.len() >= self.config.max_attempts {
            self.status = GameStatus::Lost;
        }

        debug!(
            "Guess {}/{}: {} -> {:?}",
            self.guesses.len(),
            self.config.max_attempts,
            verdict.to_emoji(),
            self.status
        );

        Ok(verdict)
    }

    /// Submit `word` as a guess in place of the input buffer
    ///
    /// On success the buffer is cleared. On failure the buffer keeps
    /// whatever had been typed before the call.
    ///
    /// # Errors
    /// Same as [`submit`](Self::submit); additionally
    /// [`GameError::Rejected`] if `word` contains anything but letters.
    pub fn submit_word(&mut self, word: &str) -> Result<Verdict, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::Rejected("the game is over"));
        }

        let word = word.trim();
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::Rejected("only letters are allowed"));
        }
        if word.len() != self.config.word_length {
            return Err(GameError::TooShort {
                required: self.config.word_length,
                actual: word.len(),
            });
        }

        let typed = std::mem::replace(&mut self.input, word.to_ascii_uppercase());
        let result = self.submit();
        if result.is_err() {
            self.input = typed;
        }
        result
    }

    #[must_use]
    pub const fn config(&self) -> WordGameConfig {
        self.config
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.config.max_attempts - self.guesses.len()
    }

    /// Best status seen so far for every guessed letter
    #[must_use]
    pub fn letter_states(&self) -> BTreeMap<char, LetterStatus> {
        let mut states = BTreeMap::new();
        for lv in self.verdicts.iter().flat_map(Verdict::letters) {
            states
                .entry(lv.letter)
                .and_modify(|s: &mut LetterStatus| *s = (*s).max(lv.status))
                .or_insert(lv.status);
        }
        states
    }
}

impl Session for WordGame<'_> {
    type State = WordGameState;

    fn state(&self) -> WordGameState {
        WordGameState {
            target: self.target.clone(),
            guesses: self.guesses.clone(),
            verdicts: self.verdicts.clone(),
            current_input: self.input.clone(),
            status: self.status,
            max_attempts: self.config.max_attempts,
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DictionaryProvider, WordList};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> WordList {
        words_from_slice(&[
            "crane", "slate", "irate", "crate", "grate", "speed", "erase", "audio", "stone",
            "pearl",
        ])
        .into_iter()
        .collect()
    }

    fn type_word(game: &mut WordGame, word: &str) {
        for c in word.chars() {
            game.append_char(c).unwrap();
        }
    }

    #[test]
    fn correct_guess_wins() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();

        type_word(&mut game, "crate");
        let verdict = game.submit().unwrap();

        assert!(verdict.is_solved());
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_over());
        assert_eq!(game.guesses(), &["CRATE".to_string()]);
        assert_eq!(game.current_input(), "");
    }

    #[test]
    fn exhausting_attempts_loses() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();

        for word in ["crane", "slate", "irate", "grate", "speed"] {
            game.submit_word(word).unwrap();
            assert_eq!(game.status(), GameStatus::InProgress);
        }
        game.submit_word("audio").unwrap();

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.guesses().len(), 6);
        assert_eq!(game.attempts_left(), 0);
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let dict = dictionary();
        let config = WordGameConfig {
            word_length: 5,
            max_attempts: 2,
        };
        let mut game = WordGame::with_target(&dict, "crate", config).unwrap();

        game.submit_word("crane").unwrap();
        game.submit_word("crate").unwrap();

        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn terminal_game_rejects_everything() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();
        game.submit_word("crate").unwrap();

        let before = game.state();
        assert_eq!(game.append_char('a'), Err(GameError::Rejected("the game is over")));
        assert!(!game.delete_char());
        assert!(matches!(game.submit(), Err(GameError::Rejected(_))));
        assert!(matches!(game.submit_word("slate"), Err(GameError::Rejected(_))));
        assert_eq!(game.state(), before);
    }

    #[test]
    fn short_guess_is_rejected_and_kept() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();

        type_word(&mut game, "cra");
        assert_eq!(
            game.submit(),
            Err(GameError::TooShort {
                required: 5,
                actual: 3
            })
        );
        assert_eq!(game.current_input(), "CRA");
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected_without_using_an_attempt() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();

        assert_eq!(
            game.submit_word("qzxwv"),
            Err(GameError::NotInDictionary("QZXWV".to_string()))
        );
        assert_eq!(game.attempts_left(), 6);
        assert_eq!(game.status(), GameStatus::InProgress);

        // Still playable afterwards
        game.submit_word("crate").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn rejected_word_leaves_typed_input_alone() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();
        type_word(&mut game, "cr");

        assert_eq!(
            game.submit_word("cranes"),
            Err(GameError::TooShort {
                required: 5,
                actual: 6
            })
        );
        assert_eq!(game.state().current_input, "CR");

        assert!(game.submit_word("qzxwv").is_err());
        assert_eq!(game.state().current_input, "CR");

        // The row can still be finished by typing
        type_word(&mut game, "ate");
        assert!(game.submit().unwrap().is_solved());
        assert_eq!(game.current_input(), "");
    }

    #[test]
    fn unready_dictionary_accepts_any_word() {
        let provider = DictionaryProvider::new();
        let mut game =
            WordGame::with_target(&provider, "crate", WordGameConfig::default()).unwrap();

        assert!(game.submit_word("qzxwv").is_ok());
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn target_is_always_accepted() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "honey", WordGameConfig::default()).unwrap();
        assert!(game.submit_word("honey").unwrap().is_solved());
    }

    #[test]
    fn append_stops_at_word_length() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();

        type_word(&mut game, "crane");
        assert_eq!(game.append_char('s'), Err(GameError::Rejected("the row is full")));
        assert_eq!(game.current_input(), "CRANE");
    }

    #[test]
    fn append_rejects_non_letters() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();

        assert!(game.append_char('1').is_err());
        assert!(game.append_char(' ').is_err());
        game.append_char('c').unwrap();
        assert_eq!(game.current_input(), "C");
    }

    #[test]
    fn delete_on_empty_buffer_is_a_noop() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();

        for _ in 0..3 {
            assert!(!game.delete_char());
        }
        game.append_char('c').unwrap();
        assert!(game.delete_char());
        assert_eq!(game.current_input(), "");
    }

    #[test]
    fn letter_states_keep_best_status() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();

        // The first E of ERASE finds no spare E, the second is exact
        game.submit_word("erase").unwrap();
        game.submit_word("irate").unwrap();

        let states = game.letter_states();
        assert_eq!(states.get(&'R'), Some(&LetterStatus::Correct));
        assert_eq!(states.get(&'S'), Some(&LetterStatus::Absent));
        assert_eq!(states.get(&'I'), Some(&LetterStatus::Absent));
        assert_eq!(states.get(&'E'), Some(&LetterStatus::Correct));
        assert_eq!(states.get(&'Z'), None);
    }

    #[test]
    fn state_is_a_detached_copy() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();
        game.submit_word("slate").unwrap();
        game.append_char('c').unwrap();

        let first = game.state();
        let mut second = game.state();
        assert_eq!(first, second);

        second.guesses.clear();
        second.current_input.push('X');
        second.status = GameStatus::Won;

        assert_eq!(game.state(), first);
        assert_eq!(first.current_input, "C");
    }

    #[test]
    fn random_target_comes_from_dictionary() {
        let dict = dictionary();
        let mut rng = StdRng::seed_from_u64(7);
        let game = WordGame::new(&dict, WordGameConfig::default(), &mut rng).unwrap();

        assert!(dict.contains(game.target()));
        assert_eq!(game.target().len(), 5);
    }

    #[test]
    fn same_seed_same_target() {
        let dict = WordList::embedded();
        let a = WordGame::new(&dict, WordGameConfig::default(), &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = WordGame::new(&dict, WordGameConfig::default(), &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a.target(), b.target());
    }

    #[test]
    fn empty_dictionary_falls_back_to_embedded_answers() {
        let provider = DictionaryProvider::new();
        let mut rng = StdRng::seed_from_u64(1);
        let game = WordGame::new(&provider, WordGameConfig::default(), &mut rng).unwrap();

        let answers = words_from_slice(ANSWERS);
        assert!(answers.iter().any(|w| w.text() == game.target()));
    }

    #[test]
    fn impossible_length_is_an_error() {
        let dict = dictionary();
        let config = WordGameConfig {
            word_length: 12,
            max_attempts: 6,
        };
        let result = WordGame::new(&dict, config, &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(GameError::InvalidPuzzle(_))));
    }

    #[test]
    fn zero_attempts_is_an_error() {
        let dict = dictionary();
        let config = WordGameConfig {
            word_length: 5,
            max_attempts: 0,
        };
        assert!(WordGame::with_target(&dict, "crate", config).is_err());
    }
}
