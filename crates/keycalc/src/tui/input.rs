//! Keyboard and mouse input for the terminal frontend

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::input::InputEvent;

/// What a terminal event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send a calculator input
    Calculator(InputEvent),
    /// Click at terminal cell (column, row)
    Click(u16, u16),
    /// Quit the application
    Quit,
    /// Unmapped input
    None,
}

/// Maps crossterm events to [`KeyAction`]s
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    ///
    /// Plain keys use the browser key names: digits, `.`, `+ - * / % ^`,
    /// Enter and `=`, Backspace, Esc. Ctrl+C and Ctrl+Q quit. Key release
    /// events are ignored.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        let key = match code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Esc => "Escape".to_string(),
            _ => return KeyAction::None,
        };

        InputEvent::from_key(&key).map_or(KeyAction::None, KeyAction::Calculator)
    }

    /// Maps a mouse event to an action; only left-button presses count
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => KeyAction::Click(event.column, event.row),
            _ => KeyAction::None,
        }
    }
}
