//! Keyboard mapping for the arcade sessions.
//!
//! Key events are translated into UI-agnostic actions before they touch any
//! game state, so the simulation never sees crossterm types.

use crossterm::event::{KeyCode, KeyEvent};

/// Input actions shared by both games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap/jump. Also starts a session that is waiting to begin.
    Jump,
    /// Restart a finished session.
    Restart,
    /// Leave the session and return to the menu.
    Quit,
    /// Any other key.
    Other,
}

/// Map a key event to a game action.
pub fn map_key(key: KeyEvent) -> GameInput {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Jump,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    }
}
