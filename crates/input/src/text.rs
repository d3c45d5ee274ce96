//! Single-line text entry for the player name.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::MAX_NAME_LEN;

/// Result of feeding one key to a [`NameField`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEdit {
    /// Still typing
    Editing,
    /// Enter pressed; carries the raw (untrimmed) text
    Submit(String),
    /// Esc pressed; the field is cleared
    Abort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameField {
    text: String,
}

impl NameField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> NameEdit {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return NameEdit::Editing;
        }
        match key.code {
            KeyCode::Enter => NameEdit::Submit(std::mem::take(&mut self.text)),
            KeyCode::Esc => {
                self.text.clear();
                NameEdit::Abort
            }
            KeyCode::Backspace => {
                self.text.pop();
                NameEdit::Editing
            }
            KeyCode::Char(c) if !c.is_control() => {
                if self.text.chars().count() < MAX_NAME_LEN {
                    self.text.push(c);
                }
                NameEdit::Editing
            }
            _ => NameEdit::Editing,
        }
    }
}
