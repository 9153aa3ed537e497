//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterStatus;
use crate::games::{GameStatus, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use std::collections::BTreeMap;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDPLAY - Wordle")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn status_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, status: Option<LetterStatus>) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {letter} "), status_style(status)),
        Span::raw(" "),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let config = game.config();
    let mut lines = Vec::with_capacity(config.max_attempts * 2);

    for row in 0..config.max_attempts {
        let spans: Vec<Span> = if let Some(verdict) = game.verdicts().get(row) {
            verdict
                .letters()
                .iter()
                .flat_map(|lv| tile(lv.letter, Some(lv.status)))
                .collect()
        } else if row == game.verdicts().len() && !game.is_over() {
            let typed: Vec<char> = game.current_input().chars().collect();
            (0..config.word_length)
                .flat_map(|i| tile(typed.get(i).copied().unwrap_or('_'), None))
                .collect()
        } else {
            (0..config.word_length).flat_map(|_| tile('·', None)).collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Win rate gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, &app.game.letter_states(), chunks[0]);
    render_win_rate(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, states: &BTreeMap<char, LetterStatus>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .flat_map(|c| {
                        [
                            Span::styled(c.to_string(), status_style(states.get(&c).copied())),
                            Span::raw(" "),
                        ]
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_win_rate(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.progress.wordle;
    let rate = stats.win_rate();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(rate.clamp(0.0, 100.0) as u16)
        .label(format!("{rate:.0}% of {} games", stats.played));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver if app.game.status() == GameStatus::Won => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::GameOver => (
            " Out of guesses | Press 'n' for new game or 'q' to quit ",
            app.game.target().to_string(),
            Color::Red,
        ),
        InputMode::Typing => (
            " Type a word | Enter to submit ",
            app.game.current_input().to_string(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempts = Paragraph::new(format!("Attempts left: {}", app.game.attempts_left()))
        .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats = &app.progress.wordle;
    let played = Paragraph::new(format!("Played: {} | Won: {}", stats.played, stats.won))
        .alignment(Alignment::Center);
    f.render_widget(played, chunks[1]);

    let streak = Paragraph::new(format!(
        "Streak: {} (best {})",
        stats.current_streak, stats.max_streak
    ))
    .alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Typing => "Esc: Quit | Ctrl-N: New Game | Enter: Submit",
        InputMode::GameOver => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
