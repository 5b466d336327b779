//! Input module - keyboard handling and cursor navigation
//!
//! Pure glue around the core: maps crossterm key events to `GameAction`s and
//! keeps the board cursor clamped to the grid. The core itself is reactive
//! and never polls for input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{GameAction, BOARD_SIZE};

/// Board cursor driven by the arrow keys, clamped to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Move the cursor for a movement action; other actions are ignored
    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::MoveUp => self.row = self.row.saturating_sub(1),
            GameAction::MoveDown => self.row = (self.row + 1).min(BOARD_SIZE - 1),
            GameAction::MoveLeft => self.col = self.col.saturating_sub(1),
            GameAction::MoveRight => self.col = (self.col + 1).min(BOARD_SIZE - 1),
            GameAction::Select | GameAction::Restart => {}
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Map keyboard input to game actions
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(GameAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(GameAction::MoveDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(GameAction::MoveRight),

        // Selection
        KeyCode::Char('s') | KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Select),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
