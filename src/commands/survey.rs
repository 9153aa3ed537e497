//! Letter set survey
//!
//! Builds every puzzle the dictionary can seed (each pangram letter set
//! with each choice of center letter) and ranks them by size.

use crate::dictionary::Dictionary;
use crate::games::letter_set::pangram_seeds;
use crate::games::{LetterSetConfig, LetterSetGame};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// One generated puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSummary {
    pub required: char,
    /// Ring letters in alphabetical order
    pub available: String,
    pub words: usize,
    pub max_score: u32,
    pub pangrams: usize,
}

/// Statistics from surveying a dictionary
#[derive(Debug)]
pub struct SurveyResult {
    pub seed_words: usize,
    pub letter_sets: usize,
    /// Largest puzzles first
    pub puzzles: Vec<PuzzleSummary>,
    pub duration: Duration,
}

impl SurveyResult {
    #[must_use]
    pub fn best(&self) -> Option<&PuzzleSummary> {
        self.puzzles.first()
    }

    /// Mean number of valid words per puzzle
    #[must_use]
    pub fn average_words(&self) -> f64 {
        if self.puzzles.is_empty() {
            return 0.0;
        }
        let total: usize = self.puzzles.iter().map(|p| p.words).sum();
        total as f64 / self.puzzles.len() as f64
    }
}

/// Distinct letter sets among the seed words, each sorted
fn letter_sets(seeds: &[String]) -> Vec<Vec<char>> {
    let sets: BTreeSet<Vec<char>> = seeds
        .iter()
        .map(|seed| {
            let mut letters: Vec<char> = seed.chars().collect();
            letters.sort_unstable();
            letters.dedup();
            letters
        })
        .collect();
    sets.into_iter().collect()
}

fn summarize(
    dictionary: &dyn Dictionary,
    letters: &[char],
    required: char,
    config: LetterSetConfig,
) -> Option<PuzzleSummary> {
    let available: Vec<char> = letters.iter().copied().filter(|&c| c != required).collect();

    match LetterSetGame::with_letters(dictionary, required, &available, config) {
        Ok(game) => Some(PuzzleSummary {
            required,
            available: available.iter().collect(),
            words: game.valid_word_count(),
            max_score: game.max_score(),
            pangrams: game.pangrams().len(),
        }),
        Err(e) => {
            warn!("Skipping letter set {letters:?}: {e}");
            None
        }
    }
}

/// Survey every puzzle the dictionary can produce
///
/// `limit` caps the number of letter sets examined.
pub fn run_survey(
    dictionary: &(dyn Dictionary + Sync),
    config: LetterSetConfig,
    limit: Option<usize>,
) -> SurveyResult {
    let start = Instant::now();

    let seeds = pangram_seeds(dictionary, config.alphabet_size);
    let mut sets = letter_sets(&seeds);
    if let Some(limit) = limit {
        sets.truncate(limit);
    }

    debug!(
        "{} seed words give {} letter sets",
        seeds.len(),
        sets.len()
    );

    let pb = ProgressBar::new(sets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message("Surveying letter sets");

    let mut puzzles: Vec<PuzzleSummary> = sets
        .par_iter()
        .flat_map_iter(|letters| {
            let summaries: Vec<PuzzleSummary> = letters
                .iter()
                .filter_map(|&required| summarize(dictionary, letters, required, config))
                .collect();
            pb.inc(1);
            summaries
        })
        .collect();

    pb.finish_with_message("Complete!");

    puzzles.sort_by(|a, b| {
        b.max_score
            .cmp(&a.max_score)
            .then(b.words.cmp(&a.words))
            .then(a.required.cmp(&b.required))
            .then(a.available.cmp(&b.available))
    });

    SurveyResult {
        seed_words: seeds.len(),
        letter_sets: sets.len(),
        puzzles,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{WordList, loader::words_from_slice};
    use pretty_assertions::assert_eq;

    fn dictionary() -> WordList {
        words_from_slice(&[
            "certain", "creatine", "train", "rain", "trace", "nectar", "tier", "nice",
        ])
        .into_iter()
        .collect()
    }

    #[test]
    fn anagram_seeds_share_a_letter_set() {
        let seeds = vec!["CERTAIN".to_string(), "CREATINE".to_string()];
        assert_eq!(
            letter_sets(&seeds),
            vec![vec!['A', 'C', 'E', 'I', 'N', 'R', 'T']]
        );
    }

    #[test]
    fn one_puzzle_per_center_letter() {
        let dict = dictionary();
        let result = run_survey(&dict, LetterSetConfig::default(), None);

        assert_eq!(result.seed_words, 2);
        assert_eq!(result.letter_sets, 1);
        assert_eq!(result.puzzles.len(), 7);
    }

    #[test]
    fn puzzles_sorted_largest_first() {
        let dict = dictionary();
        let result = run_survey(&dict, LetterSetConfig::default(), None);

        for pair in result.puzzles.windows(2) {
            assert!(pair[0].max_score >= pair[1].max_score);
        }

        // R appears in all but NICE
        let best = result.best().unwrap();
        assert_eq!(best.required, 'R');
        assert_eq!(best.available, "ACEINT");
        assert_eq!(best.words, 7);
        assert_eq!(best.max_score, 47);
        assert_eq!(best.pangrams, 2);
    }

    #[test]
    fn limit_caps_letter_sets() {
        let dict = dictionary();
        let result = run_survey(&dict, LetterSetConfig::default(), Some(0));

        assert_eq!(result.letter_sets, 0);
        assert!(result.puzzles.is_empty());
        assert!(result.best().is_none());
        assert!(result.average_words() < f64::EPSILON);
    }
}
