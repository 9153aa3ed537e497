//! Word list loading utilities
//!
//! Loads word lists from files, from embedded constants, or in the background
//! into a [`DictionaryProvider`].

use super::DictionaryProvider;
use crate::core::Word;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Load words from a file, one per line
///
/// Blank lines and entries that do not normalize (digits, punctuation,
/// single letters) are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordplay::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        debug!("Skipped {skipped} unusable lines");
    }

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordplay::dictionary::loader::words_from_slice;
/// use wordplay::dictionary::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load `path` on a background thread and install it into `provider`
///
/// If the file cannot be read, or holds no usable words, the embedded
/// fallback list is installed instead. The handle yields the installed
/// word count.
pub fn spawn_file_loader(provider: Arc<DictionaryProvider>, path: PathBuf) -> JoinHandle<usize> {
    thread::spawn(move || match load_from_file(&path) {
        Ok(words) if !words.is_empty() => {
            info!("Loaded {} words from {}", words.len(), path.display());
            provider.install(words)
        }
        Ok(_) => {
            warn!("{} has no usable words, using fallback list", path.display());
            provider.install_fallback()
        }
        Err(e) => {
            warn!(
                "Failed to load {}: {e}, using fallback list",
                path.display()
            );
            provider.install_fallback()
        }
    })
}
