//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, PegId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Pegs
        KeyCode::Char('1') => Some(GameAction::SelectPeg(PegId::Source)),
        KeyCode::Char('2') => Some(GameAction::SelectPeg(PegId::Auxiliary)),
        KeyCode::Char('3') => Some(GameAction::SelectPeg(PegId::Destination)),
        KeyCode::Left => Some(GameAction::CursorLeft),
        KeyCode::Right => Some(GameAction::CursorRight),

        // Disc handling
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Grab),
        KeyCode::Esc => Some(GameAction::Cancel),

        // Session controls
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::Solve),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(GameAction::MoreDiscs),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(GameAction::FewerDiscs),
        KeyCode::Char(']') => Some(GameAction::TimerUp),
        KeyCode::Char('[') => Some(GameAction::TimerDown),

        // Panels
        KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::ToggleLog),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameAction::ToggleRecords),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::EditName),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(GameAction::Export),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
