//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GameStatus, RoundController, Statistics, SubmitOutcome, WordPicker};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<P> {
    pub game: RoundController<P>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
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

impl<P: WordPicker> App<P> {
    #[must_use]
    pub fn new(game: RoundController<P>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!("Guess the {WORD_LENGTH}-letter word. Type and press Enter."),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            _ if self.game.is_terminal() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                // Input is disabled until a new game starts
                _ => {}
            },
            KeyCode::Char(c) if !ctrl => self.type_char(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.game.update_draft(&self.input_buffer);
            }
            KeyCode::Enter => self.submit_draft(),
            _ => {}
        }
    }

    fn type_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < WORD_LENGTH {
            self.input_buffer.push(c.to_ascii_lowercase());
            self.game.update_draft(&self.input_buffer);
        }
    }

    fn submit_draft(&mut self) {
        if self.game.is_terminal() {
            return;
        }
        match self.game.submit() {
            SubmitOutcome::Ignored => {
                self.add_message("Not enough letters", MessageStyle::Error);
                return;
            }
            SubmitOutcome::Continue => {
                let remaining = self.game.rounds_remaining();
                self.add_message(
                    &format!(
                        "{remaining} {} left",
                        if remaining == 1 { "guess" } else { "guesses" }
                    ),
                    MessageStyle::Info,
                );
            }
            SubmitOutcome::Won => {
                let rounds = self.game.current_round();
                let celebration = match rounds {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.stats.record(GameStatus::Won, rounds);
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SubmitOutcome::Exhausted => {
                self.stats
                    .record(GameStatus::Exhausted, self.game.current_round());
                self.add_message(
                    &format!(
                        "Out of guesses! The word was {}",
                        self.game.target().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
        self.input_buffer.clear();
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        debug!(games = self.stats.total_games, "new game from TUI");
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: WordPicker>(app: App<P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, P: WordPicker>(
    terminal: &mut Terminal<B>,
    mut app: App<P>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
