//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, message log and session statistics.

use super::app::{App, MessageStyle};
use crate::core::{Classification, Guess, Letter, NUM_ROUNDS};
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<P>(f: &mut Frame, app: &App<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn tile_style(class: Classification) -> Style {
    match class {
        Classification::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Classification::Partial => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Classification::Incorrect => Style::default().fg(Color::White).bg(Color::DarkGray),
        Classification::Unused => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn tile(letter: &Letter) -> Span<'static> {
    let text = match letter.ch {
        Some(ch) => format!(" {} ", ch.to_ascii_uppercase()),
        None => " · ".to_string(),
    };
    Span::styled(text, tile_style(letter.class))
}

fn board_row(guess: &Guess, is_current: bool) -> Line<'static> {
    let marker = if is_current { "▶ " } else { "  " };
    let mut spans = vec![Span::styled(marker, Style::default().fg(Color::Yellow))];
    for letter in guess.letters() {
        spans.push(tile(letter));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board<P>(f: &mut Frame, app: &App<P>, area: Rect) {
    let current = (!app.game.is_terminal()).then(|| app.game.current_round());

    let mut lines = vec![Line::from("")];
    for (i, guess) in app.game.history().iter().enumerate() {
        lines.push(board_row(guess, current == Some(i)));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Round {}/{NUM_ROUNDS} ", app.game.current_round()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<P>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(5),    // Messages
            Constraint::Length(9), // Distribution
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_distribution(f, app, chunks[2]);
}

/// Best classification seen so far for every submitted letter
///
/// Correct beats partial beats incorrect.
#[must_use]
pub fn keyboard_states(submitted: &[Guess]) -> FxHashMap<char, Classification> {
    fn rank(class: Classification) -> u8 {
        match class {
            Classification::Correct => 3,
            Classification::Partial => 2,
            Classification::Incorrect => 1,
            Classification::Unused => 0,
        }
    }

    let mut states: FxHashMap<char, Classification> = FxHashMap::default();
    for letter in submitted.iter().flat_map(Guess::letters) {
        let Some(ch) = letter.ch else { continue };
        let entry = states.entry(ch).or_insert(Classification::Unused);
        if rank(letter.class) > rank(*entry) {
            *entry = letter.class;
        }
    }
    states
}

fn render_keyboard<P>(f: &mut Frame, app: &App<P>, area: Rect) {
    let states = keyboard_states(app.game.submitted());

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|ch| {
                    let class = states
                        .get(&ch)
                        .copied()
                        .unwrap_or(Classification::Unused);
                    let style = match class {
                        Classification::Unused => Style::default().fg(Color::Gray),
                        other => tile_style(other),
                    };
                    Span::styled(format!("{}", ch.to_ascii_uppercase()), style)
                })
                .flat_map(|span| [span, Span::raw(" ")])
                .collect();
            Line::from(spans)
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

fn render_messages<P>(f: &mut Frame, app: &App<P>, area: Rect) {
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

fn render_distribution<P>(f: &mut Frame, app: &App<P>, area: Rect) {
    let dist = &app.stats.guess_distribution;
    let max = dist.iter().copied().max().unwrap_or(0).max(1);

    let lines: Vec<Line> = (1..=NUM_ROUNDS)
        .map(|guesses| {
            let count = dist[guesses];
            let width = count * 20 / max;
            Line::from(vec![
                Span::raw(format!("{guesses}: ")),
                Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let distribution = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(distribution, area);
}

fn render_input<P>(f: &mut Frame, app: &App<P>, area: Rect) {
    let (title, content, color) = match app.game.status() {
        GameStatus::Won => (
            " 🎉 You win! | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        GameStatus::Exhausted => (
            format!(
                " The word was {} | Press 'n' for new game or 'q' to quit ",
                app.game.target().text().to_uppercase()
            ),
            String::new(),
            Color::Red,
        ),
        GameStatus::InProgress => (
            " Type your guess | Enter to submit | Ctrl+N new game | Esc to quit ".to_string(),
            app.input_buffer.to_uppercase(),
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

fn render_status<P>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.game.status() {
        GameStatus::InProgress => "Playing",
        GameStatus::Won => "Won",
        GameStatus::Exhausted => "Game over",
    };
    let mode = Paragraph::new(format!("Mode: {mode_text}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.max_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Enter: Submit | ^N: New")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
