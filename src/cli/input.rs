//! Keystroke input handling using crossterm
//!
//! Features:
//! - Blocking keystroke capture (raw mode is owned by the display)
//! - Translation of terminal keys into kana-table key codes
//! - Escape and Ctrl+C both cancel the session

use crossterm::event::{self, Event, KeyCode as TermKey, KeyEvent, KeyEventKind, KeyModifiers};
use kana_kb_trainer::kana::{KeyCode, CANCEL_KEY};
use kana_kb_trainer::session::KeySource;
use kana_kb_trainer::TrainerError;
use std::io::Result as IoResult;

/// Code for keys that have no character (arrows, function keys, ...)
pub const NO_KEY: KeyCode = 0;

/// Handles user input from terminal
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        InputHandler
    }

    /// Block until a key is pressed
    pub fn read_key(&self) -> IoResult<KeyEvent> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Release {
                    return Ok(key_event);
                }
            }
        }
    }

    /// Check if key event is an exit signal (Ctrl+C or Escape)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            TermKey::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            TermKey::Esc => true,
            _ => false,
        }
    }

    /// Convert a key event to the code the kana table is keyed by
    pub fn key_code(key: &KeyEvent) -> KeyCode {
        if Self::is_exit(key) {
            return CANCEL_KEY;
        }

        match key.code {
            // Shifted keys arrive as the shifted character ('E', '#', '}')
            TermKey::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                c as KeyCode
            }
            TermKey::Enter => 0x0d,
            TermKey::Tab => 0x09,
            TermKey::Backspace => 0x7f,
            _ => NO_KEY,
        }
    }
}

impl KeySource for InputHandler {
    fn next_key(&mut self) -> Result<KeyCode, TrainerError> {
        let key = self.read_key()?;
        Ok(Self::key_code(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kana_kb_trainer::kana::KeyKanaTable;

    fn press(code: TermKey, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_printable_keys() {
        assert_eq!(InputHandler::key_code(&press(TermKey::Char('3'), KeyModifiers::NONE)), '3' as KeyCode);
        assert_eq!(InputHandler::key_code(&press(TermKey::Char('E'), KeyModifiers::SHIFT)), 'E' as KeyCode);
        let table = KeyKanaTable::global();
        let code = InputHandler::key_code(&press(TermKey::Char('}'), KeyModifiers::SHIFT));
        assert_eq!(table.kana_for_key(code), Some('ー'));
    }

    #[test]
    fn test_exit_keys() {
        assert_eq!(InputHandler::key_code(&press(TermKey::Esc, KeyModifiers::NONE)), CANCEL_KEY);
        assert_eq!(InputHandler::key_code(&press(TermKey::Char('c'), KeyModifiers::CONTROL)), CANCEL_KEY);
        assert!(!InputHandler::is_exit(&press(TermKey::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_special_keys_are_unmapped() {
        let table = KeyKanaTable::global();
        for code in [TermKey::Left, TermKey::F(1), TermKey::Enter, TermKey::Backspace, TermKey::Tab] {
            let key = InputHandler::key_code(&press(code, KeyModifiers::NONE));
            assert!(!table.is_mapped_key(key));
            assert_ne!(key, CANCEL_KEY);
        }
        assert_eq!(InputHandler::key_code(&press(TermKey::Char('t'), KeyModifiers::ALT)), NO_KEY);
    }
}
