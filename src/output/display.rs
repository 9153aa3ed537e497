//! Display functions for command results

use super::formatters::{create_progress_bar, verdict_tiles, verdict_to_emoji};
use crate::commands::{CheckResult, SurveyResult};
use crate::progress::Progress;
use colored::Colorize;

const SURVEY_ROWS: usize = 10;

/// Print the verdict of a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} → {}",
        result.guess.bright_white().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}  {}",
        verdict_tiles(&result.verdict),
        verdict_to_emoji(&result.verdict)
    );

    if !result.in_dictionary {
        println!(
            "\n  {}",
            format!("⚠ {} is not in the dictionary", result.guess).yellow()
        );
    }
    if result.verdict.is_solved() {
        println!("\n{}", "✅ Exact match".green().bold());
    }
}

/// Print the ranked puzzles from a survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER SET SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Dictionary:".bright_cyan().bold());
    println!("   Seed words:       {}", result.seed_words);
    println!("   Letter sets:      {}", result.letter_sets);
    println!("   Puzzles:          {}", result.puzzles.len());
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words()).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let Some(best) = result.best() else {
        println!(
            "\n{}",
            "No word has enough distinct letters to seed a puzzle".yellow()
        );
        return;
    };

    println!("\n🏆 {}", "Largest puzzles:".bright_cyan().bold());
    for puzzle in result.puzzles.iter().take(SURVEY_ROWS) {
        let bar = create_progress_bar(
            f64::from(puzzle.max_score),
            f64::from(best.max_score),
            30,
        );
        println!(
            "   [{}] {}  {} {:4} pts {:3} words {} pangrams",
            puzzle.required.to_string().bright_yellow().bold(),
            puzzle.available,
            bar.green(),
            puzzle.max_score,
            puzzle.words,
            puzzle.pangrams
        );
    }
}

/// Print saved statistics for every game
pub fn print_progress(progress: &Progress) {
    let wordle = &progress.wordle;
    println!("\n🟩 {}", "Wordle".bright_cyan().bold());
    println!("   Played:           {}", wordle.played);
    println!(
        "   Win rate:         {}",
        format!("{:.0}%", wordle.win_rate()).bright_yellow()
    );
    println!(
        "   Streak:           {} (best {})",
        wordle.current_streak, wordle.max_streak
    );

    let max_count = wordle.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in wordle.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max_count), 30);
        println!("   {}: {} {count}", i + 1, bar.green());
    }

    let bee = &progress.bee;
    println!("\n🐝 {}", "Spelling Bee".bright_cyan().bold());
    println!("   Puzzles:          {}", bee.puzzles);
    println!("   Words found:      {}", bee.words_found);
    println!("   Pangrams:         {}", bee.pangrams);
    println!("   Total points:     {}", bee.total_points);
    println!(
        "   Best rank:        {}",
        bee.best_rank.as_deref().unwrap_or("-")
    );

    let connections = &progress.connections;
    println!("\n🔗 {}", "Connections".bright_cyan().bold());
    println!("   Played:           {}", connections.played);
    println!("   Won:              {}", connections.won);
    println!("   Perfect:          {}", connections.perfect);
}
