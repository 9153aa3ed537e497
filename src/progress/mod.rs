//! Player progress across sessions
//!
//! [`Progress`] is a plain owned record. Finished sessions are folded into
//! it with the `record_*` methods and a [`ProgressStore`] loads and saves it.

mod store;

pub use store::{JsonFileStore, MemoryStore, ProgressError, ProgressStore};

use crate::games::letter_set::rank_index;
use crate::games::{CategoryGameState, GameStatus, LetterSetState, WordGameState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordleStats {
    pub played: u32,
    pub won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by number of guesses; index 0 is a first-guess win
    pub guess_distribution: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeeStats {
    pub puzzles: u32,
    pub words_found: u32,
    pub pangrams: u32,
    pub total_points: u32,
    pub best_rank: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionsStats {
    pub played: u32,
    pub won: u32,
    /// Wins without a single mistake
    pub perfect: u32,
}

/// Everything persisted between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub wordle: WordleStats,
    pub bee: BeeStats,
    pub connections: ConnectionsStats,
}

impl Progress {
    /// Fold a finished Wordle game into the stats
    ///
    /// Returns false (and records nothing) while the game is in progress.
    pub fn record_wordle(&mut self, state: &WordGameState) -> bool {
        let stats = &mut self.wordle;
        match state.status {
            GameStatus::InProgress => return false,
            GameStatus::Won => {
                stats.won += 1;
                stats.current_streak += 1;
                stats.max_streak = stats.max_streak.max(stats.current_streak);

                let slot = state.guesses.len().saturating_sub(1);
                if stats.guess_distribution.len() <= slot {
                    stats.guess_distribution.resize(slot + 1, 0);
                }
                stats.guess_distribution[slot] += 1;
            }
            GameStatus::Lost => stats.current_streak = 0,
        }
        stats.played += 1;
        true
    }

    /// Fold a letter set session into the stats
    ///
    /// Letter set games have no losing end, so any session with at least one
    /// found word counts as a played puzzle.
    pub fn record_bee(&mut self, state: &LetterSetState) -> bool {
        if state.found_words.is_empty() {
            return false;
        }

        let letter_count = state.available_letters.len() + 1;
        let pangrams = state
            .found_words
            .iter()
            .filter(|w| {
                let mut letters: Vec<char> = w.chars().collect();
                letters.sort_unstable();
                letters.dedup();
                letters.len() == letter_count
            })
            .count();

        let stats = &mut self.bee;
        stats.puzzles += 1;
        stats.words_found += state.found_words.len() as u32;
        stats.pangrams += pangrams as u32;
        stats.total_points += state.score;

        let improved = match stats.best_rank.as_deref().and_then(rank_index) {
            Some(best) => rank_index(state.rank).is_some_and(|current| current > best),
            None => true,
        };
        if improved {
            stats.best_rank = Some(state.rank.to_string());
        }
        true
    }

    /// Fold a finished category game into the stats
    pub fn record_connections(&mut self, state: &CategoryGameState) -> bool {
        let stats = &mut self.connections;
        match state.status {
            GameStatus::InProgress => return false,
            GameStatus::Won => {
                stats.won += 1;
                if state.mistakes_remaining == state.max_mistakes {
                    stats.perfect += 1;
                }
            }
            GameStatus::Lost => {}
        }
        stats.played += 1;
        true
    }
}

impl WordleStats {
    /// Percentage of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{WordList, loader::words_from_slice};
    use crate::games::{
        CategoryConfig, CategoryGame, LetterSetConfig, LetterSetGame, Session, WordGame,
        WordGameConfig,
    };
    use crate::games::categories::embedded_puzzles;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> WordList {
        words_from_slice(&["crane", "slate", "crate", "train", "certain", "rain"])
            .into_iter()
            .collect()
    }

    #[test]
    fn in_progress_games_are_not_recorded() {
        let dict = dictionary();
        let game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();
        let mut progress = Progress::default();

        assert!(!progress.record_wordle(&game.state()));
        assert_eq!(progress, Progress::default());
    }

    #[test]
    fn wordle_wins_and_streaks() {
        let dict = dictionary();
        let mut progress = Progress::default();

        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();
        game.submit_word("crane").unwrap();
        game.submit_word("crate").unwrap();
        assert!(progress.record_wordle(&game.state()));

        let mut game = WordGame::with_target(&dict, "crate", WordGameConfig::default()).unwrap();
        game.submit_word("crate").unwrap();
        progress.record_wordle(&game.state());

        assert_eq!(progress.wordle.played, 2);
        assert_eq!(progress.wordle.won, 2);
        assert_eq!(progress.wordle.current_streak, 2);
        assert_eq!(progress.wordle.guess_distribution, vec![1, 1]);
        assert!((progress.wordle.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wordle_loss_resets_streak() {
        let dict = dictionary();
        let mut progress = Progress::default();
        let config = WordGameConfig {
            word_length: 5,
            max_attempts: 1,
        };

        let mut game = WordGame::with_target(&dict, "crate", config).unwrap();
        game.submit_word("crate").unwrap();
        progress.record_wordle(&game.state());

        let mut game = WordGame::with_target(&dict, "crate", config).unwrap();
        game.submit_word("slate").unwrap();
        progress.record_wordle(&game.state());

        assert_eq!(progress.wordle.played, 2);
        assert_eq!(progress.wordle.current_streak, 0);
        assert_eq!(progress.wordle.max_streak, 1);
    }

    #[test]
    fn bee_keeps_best_rank() {
        let dict = dictionary();
        let mut progress = Progress::default();

        let mut game = LetterSetGame::with_letters(
            &dict,
            'a',
            &['c', 'e', 'i', 'n', 'r', 't'],
            LetterSetConfig::default(),
        )
        .unwrap();
        game.submit_word("certain").unwrap();
        assert!(progress.record_bee(&game.state()));
        let first_rank = progress.bee.best_rank.clone();

        let mut weaker = LetterSetGame::with_letters(
            &dict,
            'a',
            &['c', 'e', 'i', 'n', 'r', 't'],
            LetterSetConfig::default(),
        )
        .unwrap();
        weaker.submit_word("rain").unwrap();
        progress.record_bee(&weaker.state());

        assert_eq!(progress.bee.puzzles, 2);
        assert_eq!(progress.bee.words_found, 2);
        assert_eq!(progress.bee.pangrams, 1);
        assert_eq!(progress.bee.total_points, 14 + 1);
        assert_eq!(progress.bee.best_rank, first_rank);
    }

    #[test]
    fn bee_without_words_is_not_recorded() {
        let dict = dictionary();
        let game = LetterSetGame::new(&dict, LetterSetConfig::default(), &mut StdRng::seed_from_u64(1))
            .unwrap();
        let mut progress = Progress::default();
        assert!(!progress.record_bee(&game.state()));
    }

    #[test]
    fn connections_perfect_game() {
        let puzzles = embedded_puzzles().unwrap();
        let puzzle = puzzles[0].clone();
        let mut game = CategoryGame::from_puzzle(
            puzzle.clone(),
            CategoryConfig::default(),
            &mut StdRng::seed_from_u64(2),
        )
        .unwrap();

        for category in &puzzle.categories {
            for word in &category.words {
                game.toggle(word).unwrap();
            }
            game.submit().unwrap();
        }

        let mut progress = Progress::default();
        assert!(progress.record_connections(&game.state()));
        assert_eq!(progress.connections.played, 1);
        assert_eq!(progress.connections.won, 1);
        assert_eq!(progress.connections.perfect, 1);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let progress: Progress = serde_json::from_str(r#"{"wordle":{"played":3}}"#).unwrap();
        assert_eq!(progress.wordle.played, 3);
        assert_eq!(progress.bee, BeeStats::default());
    }
}
