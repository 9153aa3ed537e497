//! Dictionary provider shared by every game
//!
//! Games only see the [`Dictionary`] trait. The fail-open rule (accept
//! anything while the word list is still loading) lives in
//! [`Dictionary::is_valid`] and nowhere else.

mod embedded;
pub mod loader;
mod provider;

pub use embedded::{ANSWERS, ANSWERS_COUNT, WORDS, WORDS_COUNT};
pub use provider::{DictionaryProvider, WordList};

use crate::core::Word;

/// Read-only source of valid words
pub trait Dictionary {
    /// Exact membership test on an already-normalized (uppercase) word
    fn contains(&self, word: &str) -> bool;

    /// Every word currently loaded, sorted
    fn all_words(&self) -> Vec<String>;

    /// Whether the word list has finished loading
    fn is_ready(&self) -> bool;

    /// Validity check used by the games
    ///
    /// Before the dictionary is ready every input is accepted so play is
    /// never blocked on loading.
    fn is_valid(&self, word: &str) -> bool {
        if !self.is_ready() {
            return true;
        }
        Word::new(word).is_ok_and(|w| self.contains(w.text()))
    }

    /// Loaded words with exactly `len` letters, sorted
    fn words_of_length(&self, len: usize) -> Vec<String> {
        self.all_words()
            .into_iter()
            .filter(|w| w.len() == len)
            .collect()
    }
}

/// The embedded fallback dictionary: general words plus Wordle answers
#[must_use]
pub fn fallback_words() -> Vec<Word> {
    let mut words = loader::words_from_slice(WORDS);
    words.extend(loader::words_from_slice(ANSWERS));
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn answers_are_five_letter_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn every_fallback_word_normalizes() {
        assert_eq!(fallback_words().len(), WORDS_COUNT + ANSWERS_COUNT);
    }

    #[test]
    fn fallback_has_a_seven_letter_pangram_seed() {
        let seeds = fallback_words()
            .into_iter()
            .filter(|w| w.distinct_letters().len() == 7)
            .count();
        assert!(seeds > 0);
    }

    #[test]
    fn is_valid_fails_open_until_ready() {
        let provider = DictionaryProvider::new();
        assert!(!provider.is_ready());
        assert!(provider.is_valid("QZXWV"));
        assert!(provider.is_valid("not even a word"));

        provider.install(loader::words_from_slice(&["crane"]));
        assert!(provider.is_ready());
        assert!(provider.is_valid("crane"));
        assert!(provider.is_valid("CRANE"));
        assert!(!provider.is_valid("QZXWV"));
    }

    #[test]
    fn words_of_length_filters() {
        let list: WordList = loader::words_from_slice(&["ox", "bee", "crane", "slate"])
            .into_iter()
            .collect();
        assert_eq!(list.words_of_length(5), vec!["CRANE", "SLATE"]);
        assert_eq!(list.words_of_length(2), vec!["OX"]);
        assert!(list.words_of_length(9).is_empty());
    }
}
