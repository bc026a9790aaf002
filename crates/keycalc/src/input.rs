//! Input classification
//!
//! Frontends turn raw keys and button presses into [`InputEvent`]s before
//! anything reaches the controller. Keys that do not map are dropped here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Operation;

/// A classified calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    /// Digit `0`-`9` or decimal point
    Digit(char),
    /// Binary operator selection
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Delete the last typed character
    Backspace,
    /// Clear everything
    Clear,
}

impl InputEvent {
    /// Classifies a browser `KeyboardEvent.key` name.
    ///
    /// Recognizes digits, `.`, `+ - * / % ^`, `Enter` and `=`, `Backspace`
    /// and `Escape`. Anything else returns `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Self::Equals),
            "Backspace" => Some(Self::Backspace),
            "Escape" => Some(Self::Clear),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c @ ('0'..='9' | '.')), None) => Some(Self::Digit(c)),
                    (Some(c @ ('+' | '-' | '*' | '/' | '%' | '^')), None) => {
                        Operation::from_char(c).map(Self::Operator)
                    }
                    _ => None,
                }
            }
        }
    }

    /// Classifies one character of a replay script.
    ///
    /// Accepts the single-character browser keys plus the display symbols
    /// `×`, `÷`, `−`, `<` for backspace and `c`/`C` for clear. `\n` and `\r`
    /// act as Enter.
    #[must_use]
    pub fn from_script_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Self::Digit(c)),
            '=' | '\n' | '\r' => Some(Self::Equals),
            '<' => Some(Self::Backspace),
            'c' | 'C' => Some(Self::Clear),
            _ => Operation::from_char(c).map(Self::Operator),
        }
    }

    /// Returns the keypad label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(c) => c.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Clear => "C".to_string(),
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_digits() {
        for c in "0123456789.".chars() {
            assert_eq!(
                InputEvent::from_key(&c.to_string()),
                Some(InputEvent::Digit(c))
            );
        }
    }

    #[test]
    fn test_from_key_operators() {
        assert_eq!(
            InputEvent::from_key("+"),
            Some(InputEvent::Operator(Operation::Add))
        );
        assert_eq!(
            InputEvent::from_key("-"),
            Some(InputEvent::Operator(Operation::Subtract))
        );
        assert_eq!(
            InputEvent::from_key("*"),
            Some(InputEvent::Operator(Operation::Multiply))
        );
        assert_eq!(
            InputEvent::from_key("/"),
            Some(InputEvent::Operator(Operation::Divide))
        );
        assert_eq!(
            InputEvent::from_key("%"),
            Some(InputEvent::Operator(Operation::Modulo))
        );
        assert_eq!(
            InputEvent::from_key("^"),
            Some(InputEvent::Operator(Operation::Power))
        );
    }

    #[test]
    fn test_from_key_commands() {
        assert_eq!(InputEvent::from_key("Enter"), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_key("="), Some(InputEvent::Equals));
        assert_eq!(
            InputEvent::from_key("Backspace"),
            Some(InputEvent::Backspace)
        );
        assert_eq!(InputEvent::from_key("Escape"), Some(InputEvent::Clear));
    }

    #[test]
    fn test_from_key_filters_unknown() {
        for key in ["a", "Shift", "F5", "×", "", "12", "Tab", " "] {
            assert_eq!(InputEvent::from_key(key), None, "key {key:?}");
        }
    }

    #[test]
    fn test_from_script_char() {
        assert_eq!(
            InputEvent::from_script_char('×'),
            Some(InputEvent::Operator(Operation::Multiply))
        );
        assert_eq!(
            InputEvent::from_script_char('÷'),
            Some(InputEvent::Operator(Operation::Divide))
        );
        assert_eq!(
            InputEvent::from_script_char('−'),
            Some(InputEvent::Operator(Operation::Subtract))
        );
        assert_eq!(
            InputEvent::from_script_char('<'),
            Some(InputEvent::Backspace)
        );
        assert_eq!(InputEvent::from_script_char('C'), Some(InputEvent::Clear));
        assert_eq!(InputEvent::from_script_char('c'), Some(InputEvent::Clear));
        assert_eq!(InputEvent::from_script_char('\n'), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_script_char('x'), None);
    }

    #[test]
    fn test_label() {
        assert_eq!(InputEvent::Digit('7').label(), "7");
        assert_eq!(InputEvent::Operator(Operation::Divide).to_string(), "÷");
        assert_eq!(InputEvent::Backspace.label(), "⌫");
        assert_eq!(InputEvent::Clear.label(), "C");
        assert_eq!(InputEvent::Equals.label(), "=");
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&InputEvent::Operator(Operation::Add)).unwrap();
        assert_eq!(json, r#"{"kind":"operator","value":"add"}"#);
        let json = serde_json::to_string(&InputEvent::Equals).unwrap();
        assert_eq!(json, r#"{"kind":"equals"}"#);
    }
}
