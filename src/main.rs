//! Wordplay - CLI
//!
//! Word puzzles in the terminal: Wordle (TUI or text), Spelling Bee and
//! Connections, sharing one dictionary and one progress file.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;
use wordplay::{
    commands::{check_guess, run_bee, run_connections, run_survey, run_wordle},
    dictionary::{DictionaryProvider, loader::spawn_file_loader},
    games::{
        CategoryConfig, CategoryGame, LetterSetConfig, LetterSetGame, Session, WordGame,
        WordGameConfig,
        categories::{embedded_puzzles, puzzles_from_json},
    },
    output::{print_check_result, print_progress, print_survey_result},
    progress::{JsonFileStore, MemoryStore, Progress, ProgressStore},
};

#[derive(Parser)]
#[command(
    name = "wordplay",
    about = "Word puzzles in the terminal: Wordle, Spelling Bee and Connections",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for every random choice, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// JSON file to keep statistics in (default: not saved)
    #[arg(short, long, global = true)]
    progress: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI Wordle (default)
    Play,

    /// Text-mode Wordle
    Wordle {
        /// Play against this word instead of a random one
        #[arg(short, long)]
        target: Option<String>,

        /// Number of guesses allowed
        #[arg(short, long, default_value = "6")]
        attempts: usize,

        /// Word length for a random target
        #[arg(short, long, default_value = "5")]
        length: usize,
    },

    /// Text-mode Spelling Bee
    Bee,

    /// Text-mode Connections
    Connections {
        /// Puzzle bank JSON file (default: embedded puzzles)
        #[arg(long)]
        puzzles: Option<PathBuf>,

        /// Mistakes allowed before the game is lost
        #[arg(short, long, default_value = "4")]
        mistakes: u8,
    },

    /// Show the verdict for one guess against a target
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Rank every letter set puzzle the dictionary can produce
    Survey {
        /// Limit number of letter sets examined
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show saved statistics
    Stats,
}

fn init_logging(verbose: u8, tui: bool) {
    // Log lines would tear the alternate screen
    let verbose = if tui { 0 } else { verbose };
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Shared dictionary plus the loader thread filling it, if any
struct LoadedDictionary {
    provider: Arc<DictionaryProvider>,
    loader: Option<JoinHandle<usize>>,
}

impl LoadedDictionary {
    fn start(path: Option<PathBuf>) -> Self {
        let provider = Arc::new(DictionaryProvider::new());
        let loader = match path {
            Some(path) => Some(spawn_file_loader(Arc::clone(&provider), path)),
            None => {
                provider.install_fallback();
                None
            }
        };
        Self { provider, loader }
    }

    /// Block until the word list is installed
    fn wait(&mut self) -> Result<&DictionaryProvider> {
        if let Some(handle) = self.loader.take() {
            let count = handle
                .join()
                .map_err(|_| anyhow!("dictionary loader panicked"))?;
            info!("Dictionary ready with {count} words");
        }
        Ok(&self.provider)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play));

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let store: Box<dyn ProgressStore> = match cli.progress {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };
    let mut progress = store.load().context("could not load progress")?;

    let mut dictionary = LoadedDictionary::start(cli.dictionary);

    let changed = match command {
        Commands::Play => run_play_command(&dictionary.provider, rng, &mut progress)?,
        Commands::Wordle {
            target,
            attempts,
            length,
        } => {
            let config = WordGameConfig {
                word_length: length,
                max_attempts: attempts,
            };
            run_wordle_command(
                &dictionary.provider,
                target.as_deref(),
                config,
                &mut rng,
                &mut progress,
            )?
        }
        Commands::Bee => run_bee_command(dictionary.wait()?, &mut rng, &mut progress)?,
        Commands::Connections { puzzles, mistakes } => {
            run_connections_command(puzzles.as_deref(), mistakes, &mut rng, &mut progress)?
        }
        Commands::Check { guess, target } => {
            let result = check_guess(&guess, &target, dictionary.wait()?)?;
            print_check_result(&result);
            false
        }
        Commands::Survey { limit } => {
            let provider = dictionary.wait()?;
            let result = run_survey(provider, LetterSetConfig::default(), limit);
            print_survey_result(&result);
            false
        }
        Commands::Stats => {
            print_progress(&progress);
            false
        }
    };

    if changed {
        store.save(&progress).context("could not save progress")?;
    }
    Ok(())
}

fn run_play_command(
    dictionary: &DictionaryProvider,
    rng: StdRng,
    progress: &mut Progress,
) -> Result<bool> {
    use wordplay::interactive::{App, run_tui};

    let app = App::new(
        dictionary,
        WordGameConfig::default(),
        rng,
        std::mem::take(progress),
    )?;
    *progress = run_tui(app)?;
    Ok(true)
}

fn run_wordle_command(
    dictionary: &DictionaryProvider,
    target: Option<&str>,
    config: WordGameConfig,
    rng: &mut StdRng,
    progress: &mut Progress,
) -> Result<bool> {
    let mut game = match target {
        Some(target) => WordGame::with_target(dictionary, target, config)?,
        None => WordGame::new(dictionary, config, rng)?,
    };

    run_wordle(&mut game, io::stdin().lock(), &mut io::stdout())?;
    Ok(progress.record_wordle(&game.state()))
}

fn run_bee_command(
    dictionary: &DictionaryProvider,
    rng: &mut StdRng,
    progress: &mut Progress,
) -> Result<bool> {
    let mut game = LetterSetGame::new(dictionary, LetterSetConfig::default(), rng)?;

    run_bee(&mut game, rng, io::stdin().lock(), &mut io::stdout())?;
    Ok(progress.record_bee(&game.state()))
}

fn run_connections_command(
    puzzles: Option<&Path>,
    max_mistakes: u8,
    rng: &mut StdRng,
    progress: &mut Progress,
) -> Result<bool> {
    let bank = match puzzles {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            puzzles_from_json(&json)?
        }
        None => embedded_puzzles()?,
    };

    let mut game = CategoryGame::new(&bank, CategoryConfig { max_mistakes }, rng)?;

    run_connections(&mut game, io::stdin().lock(), &mut io::stdout())?;
    Ok(progress.record_connections(&game.state()))
}
