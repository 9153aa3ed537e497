//! Text-mode Connections
//!
//! Each input line names one group's worth of words, separated by spaces
//! or commas.

use crate::games::{CategoryGame, GameStatus, Session, SubmitOutcome};
use colored::Colorize;
use std::io::{self, BufRead, Write};

const TILES_PER_ROW: usize = 4;

fn write_board<W: Write>(game: &CategoryGame, out: &mut W) -> io::Result<()> {
    for category in game.solved() {
        writeln!(
            out,
            "  {} {}",
            format!("{}:", category.label).green().bold(),
            category.words.join(", ")
        )?;
    }

    let width = game.board().iter().map(String::len).max().unwrap_or(0);
    for row in game.board().chunks(TILES_PER_ROW) {
        let cells: Vec<String> = row.iter().map(|w| format!("{w:<width$}")).collect();
        writeln!(out, "  {}", cells.join("  "))?;
    }
    writeln!(out, "  Mistakes remaining: {}", game.mistakes_remaining())
}

/// Submit the words on one input line as a group
fn guess_group<W: Write>(game: &mut CategoryGame, line: &str, out: &mut W) -> io::Result<()> {
    game.deselect_all();

    let words = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty());
    for word in words {
        if let Err(e) = game.toggle(word) {
            game.deselect_all();
            return writeln!(out, "  ❌ {word}: {e}");
        }
    }

    match game.submit() {
        Ok(SubmitOutcome::Solved(category)) => writeln!(
            out,
            "  ✅ {} {}",
            category.label.green().bold(),
            category.words.join(", ")
        ),
        Ok(SubmitOutcome::Miss {
            one_away,
            mistakes_remaining,
        }) => {
            if one_away {
                writeln!(out, "  {}", "One away...".yellow().bold())?;
            } else {
                writeln!(out, "  ❌ Not a group")?;
            }
            writeln!(out, "  Mistakes remaining: {mistakes_remaining}")
        }
        Err(e) => {
            game.deselect_all();
            writeln!(out, "  ❌ {e}")
        }
    }
}

/// Play `game` until it ends, `!quit`, or end of input
///
/// `!board` reprints the remaining tiles.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_connections<R: BufRead, W: Write>(
    game: &mut CategoryGame,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "Find groups of {} words that share something. Commands: !board, !quit\n",
        game.group_size()
    )?;
    write_board(game, out)?;

    let mut lines = input.lines();
    while !game.is_over() {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let entry = line.trim();

        match entry.to_lowercase().as_str() {
            "" => {}
            "!board" => write_board(game, out)?,
            "!quit" => break,
            _ => guess_group(game, entry, out)?,
        }
    }

    match game.status() {
        GameStatus::Won => writeln!(out, "\n{}", "🎉 All groups found!".green().bold())?,
        GameStatus::Lost => {
            writeln!(out, "\n{}", "Out of mistakes. The groups were:".red().bold())?;
            for category in game.unsolved_categories() {
                writeln!(out, "  {}: {}", category.label, category.words.join(", "))?;
            }
        }
        GameStatus::InProgress => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{CategoryConfig, Puzzle};
    use crate::games::categories::Category;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn category(label: &str, difficulty: u8, words: [&str; 4]) -> Category {
        Category {
            label: label.to_string(),
            difficulty,
            words: words.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    fn game(max_mistakes: u8) -> CategoryGame {
        let puzzle = Puzzle {
            categories: vec![
                category("Fish", 0, ["bass", "pike", "sole", "carp"]),
                category("Instruments", 1, ["harp", "drum", "oboe", "lute"]),
                category("Poker", 2, ["call", "fold", "raise", "check"]),
                category("___ring", 3, ["ear", "key", "box", "signet"]),
            ],
        };
        let config = CategoryConfig { max_mistakes };
        CategoryGame::from_puzzle(puzzle, config, &mut StdRng::seed_from_u64(4)).unwrap()
    }

    fn play(game: &mut CategoryGame, script: &str) -> String {
        let mut out = Vec::new();
        run_connections(game, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn solving_every_group_wins() {
        let mut game = game(4);
        let output = play(
            &mut game,
            "bass pike sole carp\nharp, drum, oboe, lute\ncall fold raise check\near key box signet\n",
        );

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(output.matches("✅").count(), 4);
        assert!(output.contains("All groups found!"));
    }

    #[test]
    fn near_miss_is_reported() {
        let mut game = game(4);
        let output = play(&mut game, "bass pike sole harp\n");

        assert!(output.contains("One away..."));
        assert!(output.contains("Mistakes remaining: 3"));
        assert!(game.selection().is_empty());
    }

    #[test]
    fn bad_words_cost_nothing() {
        let mut game = game(4);
        let output = play(&mut game, "bass pike sole whale\nbass pike\n");

        assert!(output.contains("whale: that word is not on the board"));
        assert!(output.contains("Select exactly 4 words (got 2)"));
        assert_eq!(game.mistakes_remaining(), 4);
        assert!(game.selection().is_empty());
    }

    #[test]
    fn losing_reveals_groups() {
        let mut game = game(1);
        let output = play(&mut game, "bass harp call ear\n");

        assert_eq!(game.status(), GameStatus::Lost);
        assert!(output.contains("Not a group"));
        assert!(output.contains("Out of mistakes"));
        assert!(output.contains("Poker: CALL, FOLD, RAISE, CHECK"));
    }
}
