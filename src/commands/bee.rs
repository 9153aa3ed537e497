//! Text-mode Spelling Bee

use crate::games::{LetterSetGame, Session};
use crate::output::formatters::{letter_ring, score_bar};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

fn write_letters<W: Write>(game: &LetterSetGame, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "  {}",
        letter_ring(game.required_letter(), game.available_letters()).bold()
    )
}

fn write_rank<W: Write>(game: &LetterSetGame, out: &mut W) -> io::Result<()> {
    let rank = game.rank();
    write!(
        out,
        "  {} [{}] {}/{} points, {}/{} words",
        rank.name.bright_cyan().bold(),
        score_bar(game.score(), game.max_score(), 20).yellow(),
        game.score(),
        game.max_score(),
        game.found_words().len(),
        game.valid_word_count()
    )?;
    match game.points_to_next_rank() {
        Some(points) => writeln!(out, " ({points} to next rank)"),
        None => writeln!(out),
    }
}

/// Play `game` until every word is found, `!quit`, or end of input
///
/// Lines starting with `!` are commands: `!shuffle`, `!rank`, `!found`,
/// `!quit`. Anything else is submitted as a word.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_bee<R: BufRead, W: Write, G: Rng + ?Sized>(
    game: &mut LetterSetGame,
    rng: &mut G,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "Make words using the letters below. Every word needs the center letter."
    )?;
    writeln!(out, "Commands: !shuffle, !rank, !found, !quit\n")?;
    write_letters(game, out)?;
    writeln!(out)?;

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
            "!shuffle" => {
                game.shuffle_letters(rng);
                write_letters(game, out)?;
            }
            "!rank" => write_rank(game, out)?,
            "!found" => {
                let mut found = game.found_words().to_vec();
                found.sort_unstable();
                writeln!(out, "  {} found: {}", found.len(), found.join(", "))?;
            }
            "!quit" => break,
            cmd if cmd.starts_with('!') => writeln!(out, "  Unknown command {cmd}")?,
            _ => match game.submit_word(entry) {
                Ok(submission) if submission.is_pangram => writeln!(
                    out,
                    "  {} {} +{}",
                    "PANGRAM!".bright_magenta().bold(),
                    submission.word,
                    submission.score
                )?,
                Ok(submission) => writeln!(out, "  ✓ {} +{}", submission.word, submission.score)?,
                Err(e) => writeln!(out, "  ❌ {e}")?,
            },
        }
    }

    if game.is_over() {
        writeln!(out, "\n{}", "🐝 You found every word!".green().bold())?;
    }
    write_rank(game, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{WordList, loader::words_from_slice};
    use crate::games::{GameStatus, LetterSetConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> WordList {
        words_from_slice(&["certain", "train", "rain", "trace", "tier", "nice"])
            .into_iter()
            .collect()
    }

    fn play(game: &mut LetterSetGame, script: &str) -> String {
        let mut rng = StdRng::seed_from_u64(3);
        let mut out = Vec::new();
        run_bee(game, &mut rng, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn puzzle(dict: &WordList) -> LetterSetGame {
        LetterSetGame::with_letters(
            dict,
            'a',
            &['c', 'e', 'i', 'n', 'r', 't'],
            LetterSetConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn scores_words_and_pangrams() {
        let dict = dictionary();
        let mut game = puzzle(&dict);

        let output = play(&mut game, "rain\ncertain\n!quit\n");

        assert!(output.contains("✓ RAIN +1"));
        assert!(output.contains("CERTAIN +14"));
        assert!(output.contains("PANGRAM!"));
        assert_eq!(game.score(), 15);
    }

    #[test]
    fn reports_rejections() {
        let dict = dictionary();
        let mut game = puzzle(&dict);

        let output = play(&mut game, "tier\nact\nrain\nrain\n");

        assert!(output.contains("Missing the center letter 'A'"));
        assert!(output.contains("Not enough letters"));
        assert!(output.contains("'RAIN' was already found"));
        assert_eq!(game.found_words(), ["RAIN"]);
    }

    #[test]
    fn finishing_every_word_ends_the_game() {
        let dict = dictionary();
        let mut game = puzzle(&dict);

        let output = play(&mut game, "certain\ntrain\nrain\ntrace\nnever-read\n");

        assert_eq!(game.status(), GameStatus::Won);
        assert!(output.contains("You found every word!"));
        assert!(output.contains("Queen Bee"));
        assert!(!output.contains("NEVER-READ"));
    }

    #[test]
    fn shuffle_keeps_the_same_letters() {
        let dict = dictionary();
        let mut game = puzzle(&dict);
        let mut before = game.available_letters().to_vec();

        play(&mut game, "!shuffle\n!quit\n");

        let mut after = game.available_letters().to_vec();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
        assert_eq!(game.required_letter(), 'A');
    }

    #[test]
    fn found_lists_words() {
        let dict = dictionary();
        let mut game = puzzle(&dict);

        let output = play(&mut game, "train\nrain\n!found\n");

        assert!(output.contains("2 found: RAIN, TRAIN"));
    }
}
