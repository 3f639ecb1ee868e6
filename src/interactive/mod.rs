//! Interactive TUI interface
//!
//! Full-screen game built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use rendering::keyboard_states;
