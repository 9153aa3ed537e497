//! Text-mode Wordle
//!
//! Line-based game loop without the TUI. Reads one guess per line.

use crate::games::{GameStatus, Session, WordGame};
use crate::output::formatters::{verdict_tiles, verdict_to_emoji};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Play `game` to completion, reading guesses from `input`
///
/// Stops when the game ends, on `quit`, or at end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_wordle<R: BufRead, W: Write>(
    game: &mut WordGame<'_>,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let config = game.config();
    writeln!(
        out,
        "Guess the {}-letter word in {} tries. Type 'quit' to give up.\n",
        config.word_length, config.max_attempts
    )?;

    let mut lines = input.lines();
    while !game.is_over() {
        write!(out, "Guess {}/{}: ", game.guesses().len() + 1, config.max_attempts)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let guess = line.trim();

        match guess.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(out, "The word was {}", game.target().bright_yellow().bold())?;
                return Ok(());
            }
            _ => {}
        }

        match game.submit_word(guess) {
            Ok(verdict) => {
                writeln!(out, "  {}  {}", verdict_tiles(&verdict), verdict_to_emoji(&verdict))?;
            }
            Err(e) => writeln!(out, "  ❌ {e}")?,
        }
    }

    match game.status() {
        GameStatus::Won => {
            let turns = game.guesses().len();
            writeln!(
                out,
                "\n{}",
                format!(
                    "🎉 Solved in {turns} {}!",
                    if turns == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )?;
        }
        GameStatus::Lost => {
            writeln!(
                out,
                "\n{} The word was {}",
                "Out of guesses.".red().bold(),
                game.target().bright_yellow().bold()
            )?;
        }
        GameStatus::InProgress => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{WordList, loader::words_from_slice};
    use crate::games::WordGameConfig;

    fn dictionary() -> WordList {
        words_from_slice(&["crane", "slate", "crate", "irate"])
            .into_iter()
            .collect()
    }

    fn play(game: &mut WordGame<'_>, script: &str) -> String {
        let mut out = Vec::new();
        run_wordle(game, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn winning_session() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "slate", WordGameConfig::default()).unwrap();

        let output = play(&mut game, "crane\nslate\n");

        assert_eq!(game.status(), GameStatus::Won);
        assert!(output.contains("⬜⬜🟩⬜🟩"));
        assert!(output.contains("🟩🟩🟩🟩🟩"));
        assert!(output.contains("Solved in 2 guesses!"));
    }

    #[test]
    fn rejected_guesses_do_not_count() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "slate", WordGameConfig::default()).unwrap();

        let output = play(&mut game, "zzzzz\ncran\ncrate\n");

        assert_eq!(game.guesses(), ["CRATE"]);
        assert!(output.contains("ZZZZZ"));
        assert_eq!(output.matches("❌").count(), 2);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn losing_session_reveals_target() {
        let dict = dictionary();
        let config = WordGameConfig {
            max_attempts: 2,
            ..WordGameConfig::default()
        };
        let mut game = WordGame::with_target(&dict, "slate", config).unwrap();

        let output = play(&mut game, "crane\ncrate\nirate\n");

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.guesses().len(), 2);
        assert!(output.contains("Out of guesses."));
        assert!(output.contains("SLATE"));
    }

    #[test]
    fn quit_stops_early() {
        let dict = dictionary();
        let mut game = WordGame::with_target(&dict, "slate", WordGameConfig::default()).unwrap();

        let output = play(&mut game, "crane\nquit\nslate\n");

        assert_eq!(game.guesses(), ["CRANE"]);
        assert!(output.contains("The word was"));
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
