//! Dictionary implementations

use super::{Dictionary, fallback_words};
use crate::core::Word;
use log::info;
use rustc_hash::FxHashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

/// A fixed, always-ready word list
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// The embedded fallback list
    #[must_use]
    pub fn embedded() -> Self {
        fallback_words().into_iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Word::into_string).collect(),
        }
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn all_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort_unstable();
        words
    }

    fn is_ready(&self) -> bool {
        true
    }
}

/// Dictionary that is filled in after construction, possibly from another thread
///
/// Starts empty and not ready. Games created before [`install`](Self::install)
/// see the fail-open behaviour of [`Dictionary::is_valid`].
#[derive(Debug, Default)]
pub struct DictionaryProvider {
    words: RwLock<FxHashSet<String>>,
    ready: AtomicBool,
}

impl DictionaryProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that is ready immediately with the given words
    #[must_use]
    pub fn with_words(words: impl IntoIterator<Item = Word>) -> Self {
        let provider = Self::new();
        provider.install(words);
        provider
    }

    /// Replace the word set and mark the provider ready
    ///
    /// Returns the number of distinct words installed.
    pub fn install(&self, words: impl IntoIterator<Item = Word>) -> usize {
        let words: FxHashSet<String> = words.into_iter().map(Word::into_string).collect();
        let count = words.len();

        *self.words.write().unwrap_or_else(PoisonError::into_inner) = words;
        self.ready.store(true, Ordering::Release);

        info!("Dictionary ready with {count} words");
        count
    }

    /// Install the embedded fallback list
    pub fn install_fallback(&self) -> usize {
        self.install(fallback_words())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Dictionary for DictionaryProvider {
    fn contains(&self, word: &str) -> bool {
        self.words
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(word)
    }

    fn all_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .words
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect();
        words.sort_unstable();
        words
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}
