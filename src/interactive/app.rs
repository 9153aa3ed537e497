//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::games::{GameStatus, Session, WordGame, WordGameConfig};
use crate::progress::Progress;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a dyn Dictionary,
    pub config: WordGameConfig,
    pub game: WordGame<'a>,
    pub progress: Progress,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Start the app with a fresh game
    ///
    /// # Errors
    ///
    /// Returns an error if no target word can be chosen for `config`.
    pub fn new(
        dictionary: &'a dyn Dictionary,
        config: WordGameConfig,
        mut rng: StdRng,
        progress: Progress,
    ) -> Result<Self, GameError> {
        let game = WordGame::new(dictionary, config, &mut rng)?;

        Ok(Self {
            dictionary,
            config,
            game,
            progress,
            messages: vec![Message {
                text: format!(
                    "Guess the {}-letter word in {} tries.",
                    config.word_length, config.max_attempts
                ),
                style: MessageStyle::Info,
            }],
            input_mode: InputMode::Typing,
            should_quit: false,
            rng,
        })
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c) => self.type_char(c),
                KeyCode::Backspace => {
                    self.game.delete_char();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
        }
    }

    /// Add a letter; anything else, or a full row, is ignored
    pub fn type_char(&mut self, c: char) {
        if !c.is_ascii_alphabetic() {
            return;
        }
        if let Err(e) = self.game.append_char(c) {
            debug!("Ignored '{c}': {e}");
        }
    }

    pub fn submit(&mut self) {
        match self.game.submit() {
            Ok(verdict) => {
                debug!("TUI guess {}", verdict.to_emoji());
                if self.game.is_over() {
                    self.finish_game();
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        self.progress.record_wordle(&self.game.state());
        self.input_mode = InputMode::GameOver;

        if self.game.status() == GameStatus::Won {
            let celebration = match self.game.guesses().len() {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            let reveal = format!("The word was {}", self.game.target());
            self.add_message(&reveal, MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Abandon the current game and start another
    pub fn new_game(&mut self) {
        match WordGame::new(self.dictionary, self.config, &mut self.rng) {
            Ok(game) => {
                self.game = game;
                self.input_mode = InputMode::Typing;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application, returning the updated progress
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails.
pub fn run_tui(mut app: App) -> Result<Progress> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(app.progress)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    Ok(())
}
