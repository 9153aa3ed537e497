//! Connections-style category matching
//!
//! The board holds every word of N hidden categories in shuffled order. The
//! player selects K words at a time; an exact match solves that category and
//! removes its words, anything else costs a mistake.

use super::session::{GameStatus, Session};
use crate::error::GameError;
use log::{debug, info};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

const EMBEDDED_PUZZLES: &str = include_str!("../../data/categories.json");

/// Highest difficulty tag a category may carry
pub const MAX_DIFFICULTY: u8 = 3;

/// A hidden group of words sharing a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    /// 0 (easiest) to 3 (hardest)
    pub difficulty: u8,
    pub words: Vec<String>,
}

impl Category {
    fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    fn overlap(&self, selection: &[String]) -> usize {
        selection.iter().filter(|w| self.contains(w)).count()
    }
}

/// One puzzle definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub categories: Vec<Category>,
}

impl Puzzle {
    /// Check the puzzle shape
    ///
    /// # Errors
    /// Returns [`GameError::InvalidPuzzle`] unless there is at least one
    /// category, every category has the same number (at least two) of
    /// distinct words, no word appears twice across the board and every
    /// difficulty is in `0..=3`.
    pub fn validate(&self) -> Result<(), GameError> {
        let Some(first) = self.categories.first() else {
            return Err(GameError::InvalidPuzzle("no categories".to_string()));
        };

        let group_size = first.words.len();
        if group_size < 2 {
            return Err(GameError::InvalidPuzzle(format!(
                "category '{}' needs at least two words",
                first.label
            )));
        }

        let mut seen = FxHashSet::default();
        for category in &self.categories {
            if category.words.len() != group_size {
                return Err(GameError::InvalidPuzzle(format!(
                    "category '{}' has {} words, expected {group_size}",
                    category.label,
                    category.words.len()
                )));
            }
            if category.difficulty > MAX_DIFFICULTY {
                return Err(GameError::InvalidPuzzle(format!(
                    "category '{}' has difficulty {}",
                    category.label, category.difficulty
                )));
            }
            for word in &category.words {
                if !seen.insert(word.trim().to_ascii_uppercase()) {
                    return Err(GameError::InvalidPuzzle(format!("'{word}' appears twice")));
                }
            }
        }

        Ok(())
    }

    /// Words per category
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.categories.first().map_or(0, |c| c.words.len())
    }

    fn normalized(mut self) -> Self {
        for category in &mut self.categories {
            for word in &mut category.words {
                *word = word.trim().to_ascii_uppercase();
            }
        }
        self
    }
}

/// Puzzles shipped with the crate
///
/// # Errors
/// Returns [`GameError::InvalidPuzzle`] if the embedded JSON is malformed
/// or any puzzle fails validation.
pub fn embedded_puzzles() -> Result<Vec<Puzzle>, GameError> {
    puzzles_from_json(EMBEDDED_PUZZLES)
}

/// Parse and validate a puzzle bank: a JSON array of puzzles
///
/// # Errors
/// Returns [`GameError::InvalidPuzzle`] if the JSON is malformed or any
/// puzzle fails validation.
pub fn puzzles_from_json(json: &str) -> Result<Vec<Puzzle>, GameError> {
    let puzzles: Vec<Puzzle> =
        serde_json::from_str(json).map_err(|e| GameError::InvalidPuzzle(e.to_string()))?;
    for puzzle in &puzzles {
        puzzle.validate()?;
    }
    Ok(puzzles)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryConfig {
    pub max_mistakes: u8,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self { max_mistakes: 4 }
    }
}

/// Result of toggling a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected,
    Deselected,
}

/// Result of a full-size submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmitOutcome {
    Solved(Category),
    Miss {
        /// All but one selected word share an unsolved category
        one_away: bool,
        mistakes_remaining: u8,
    },
}

/// Snapshot of a [`CategoryGame`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGameState {
    pub categories: Vec<Category>,
    pub board: Vec<String>,
    pub selection: Vec<String>,
    pub solved: Vec<Category>,
    pub mistakes_remaining: u8,
    pub max_mistakes: u8,
    pub status: GameStatus,
}

/// A single category matching session
#[derive(Debug, Clone)]
pub struct CategoryGame {
    categories: Vec<Category>,
    group_size: usize,
    board: Vec<String>,
    selection: Vec<String>,
    solved: Vec<usize>,
    mistakes_remaining: u8,
    max_mistakes: u8,
    status: GameStatus,
}

impl CategoryGame {
    /// Start a game on a random puzzle from `puzzles`
    ///
    /// # Errors
    /// Returns [`GameError::InvalidPuzzle`] if `puzzles` is empty or the
    /// chosen puzzle is malformed.
    pub fn new<R: Rng + ?Sized>(
        puzzles: &[Puzzle],
        config: CategoryConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let puzzle = puzzles
            .choose(rng)
            .cloned()
            .ok_or_else(|| GameError::InvalidPuzzle("no puzzles available".to_string()))?;
        Self::from_puzzle(puzzle, config, rng)
    }

    /// Start a game on a specific puzzle, shuffling its words onto the board
    ///
    /// # Errors
    /// Returns [`GameError::InvalidPuzzle`] if the puzzle is malformed or
    /// `max_mistakes` is zero.
    pub fn from_puzzle<R: Rng + ?Sized>(
        puzzle: Puzzle,
        config: CategoryConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        puzzle.validate()?;
        if config.max_mistakes == 0 {
            return Err(GameError::InvalidPuzzle(
                "at least one mistake must be allowed".to_string(),
            ));
        }

        let puzzle = puzzle.normalized();
        let group_size = puzzle.group_size();

        let mut board: Vec<String> = puzzle
            .categories
            .iter()
            .flat_map(|c| c.words.iter().cloned())
            .collect();
        board.shuffle(rng);

        debug!(
            "New category game: {} categories of {group_size}",
            puzzle.categories.len()
        );

        Ok(Self {
            categories: puzzle.categories,
            group_size,
            board,
            selection: Vec::with_capacity(group_size),
            solved: Vec::new(),
            mistakes_remaining: config.max_mistakes,
            max_mistakes: config.max_mistakes,
            status: GameStatus::InProgress,
        })
    }

    /// Select or deselect a tile
    ///
    /// # Errors
    /// - [`GameError::Rejected`] if the game is over or `word` is not on the board
    /// - [`GameError::SelectionFull`] when selecting beyond the group size
    pub fn toggle(&mut self, word: &str) -> Result<SelectionChange, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::Rejected("the game is over"));
        }

        let word = word.trim().to_ascii_uppercase();
        if let Some(pos) = self.selection.iter().position(|w| *w == word) {
            self.selection.remove(pos);
            return Ok(SelectionChange::Deselected);
        }
        if !self.board.contains(&word) {
            return Err(GameError::Rejected("that word is not on the board"));
        }
        if self.selection.len() >= self.group_size {
            return Err(GameError::SelectionFull(self.group_size));
        }

        self.selection.push(word);
        Ok(SelectionChange::Selected)
    }

    /// Clear the current selection
    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Submit the current selection
    ///
    /// The selection is cleared after every accepted submission, hit or miss.
    ///
    /// # Errors
    /// - [`GameError::Rejected`] if the game is over
    /// - [`GameError::WrongSize`] unless exactly one group's worth is selected
    pub fn submit(&mut self) -> Result<SubmitOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::Rejected("the game is over"));
        }
        if self.selection.len() != self.group_size {
            return Err(GameError::WrongSize {
                expected: self.group_size,
                actual: self.selection.len(),
            });
        }

        let selection = std::mem::take(&mut self.selection);

        let matched = self
            .unsolved_indices()
            .find(|&i| self.categories[i].overlap(&selection) == self.group_size);

        if let Some(index) = matched {
            self.solved.push(index);
            self.board.retain(|w| !selection.contains(w));

            if self.solved.len() == self.categories.len() {
                info!("All categories solved");
                self.status = GameStatus::Won;
            }

            debug!("Solved '{}'", self.categories[index].label);
            return Ok(SubmitOutcome::Solved(self.categories[index].clone()));
        }

        let max_overlap = self
            .unsolved_indices()
            .map(|i| self.categories[i].overlap(&selection))
            .max()
            .unwrap_or(0);

        self.mistakes_remaining = self.mistakes_remaining.saturating_sub(1);
        if self.mistakes_remaining == 0 {
            info!("Out of mistakes");
            self.status = GameStatus::Lost;
        }

        let one_away = max_overlap + 1 == self.group_size;
        debug!(
            "Miss: best overlap {max_overlap}, {} mistakes left",
            self.mistakes_remaining
        );

        Ok(SubmitOutcome::Miss {
            one_away,
            mistakes_remaining: self.mistakes_remaining,
        })
    }

    #[must_use]
    pub fn board(&self) -> &[String] {
        &self.board
    }

    #[must_use]
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    #[must_use]
    pub const fn group_size(&self) -> usize {
        self.group_size
    }

    #[must_use]
    pub const fn mistakes_remaining(&self) -> u8 {
        self.mistakes_remaining
    }

    /// Solved categories in the order they were found
    pub fn solved(&self) -> impl Iterator<Item = &Category> {
        self.solved.iter().map(|&i| &self.categories[i])
    }

    /// Categories not yet found, in definition order
    pub fn unsolved_categories(&self) -> impl Iterator<Item = &Category> {
        self.unsolved_indices().map(|i| &self.categories[i])
    }

    fn unsolved_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.categories.len()).filter(|i| !self.solved.contains(i))
    }
}

impl Session for CategoryGame {
    type State = CategoryGameState;

    fn state(&self) -> CategoryGameState {
        CategoryGameState {
            categories: self.categories.clone(),
            board: self.board.clone(),
            selection: self.selection.clone(),
            solved: self.solved().cloned().collect(),
            mistakes_remaining: self.mistakes_remaining,
            max_mistakes: self.max_mistakes,
            status: self.status,
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }
}
