//! Formatting utilities for terminal output

use crate::core::{LetterStatus, Verdict};
use colored::{ColoredString, Colorize};

/// Format a verdict as emoji squares
#[must_use]
pub fn verdict_to_emoji(verdict: &Verdict) -> String {
    verdict.to_emoji()
}

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// Render a whole verdict as a row of colored tiles
#[must_use]
pub fn verdict_tiles(verdict: &Verdict) -> String {
    verdict
        .letters()
        .iter()
        .map(|lv| letter_tile(lv.letter, lv.status).to_string())
        .collect()
}

/// Show the puzzle letters with the center letter bracketed
#[must_use]
pub fn letter_ring(required: char, available: &[char]) -> String {
    let ring: Vec<String> = available.iter().map(char::to_string).collect();
    format!("[{required}] {}", ring.join(" "))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score bar for letter set progress
#[must_use]
pub fn score_bar(score: u32, max_score: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(max_score), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn emoji_for_mixed_verdict() {
        let verdict = evaluate("crane", "slate").unwrap();
        assert_eq!(verdict_to_emoji(&verdict), "⬜⬜🟩⬜🟩");
    }

    #[test]
    fn tiles_contain_every_letter() {
        let verdict = evaluate("crane", "slate").unwrap();
        let tiles = verdict_tiles(&verdict);
        for letter in ["C", "R", "A", "N", "E"] {
            assert!(tiles.contains(letter));
        }
    }

    #[test]
    fn ring_brackets_center() {
        assert_eq!(letter_ring('A', &['C', 'E', 'T']), "[A] C E T");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(score_bar(0, 0, 4), "░░░░");
    }
}
