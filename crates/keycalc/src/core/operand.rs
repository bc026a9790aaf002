//! Operand being typed on the keypad

use std::fmt;

use super::number::parse_operand;

/// One side of a binary calculation, held as the literal the user typed.
///
/// The string is unvalidated apart from one invariant: digit entry never
/// produces more than one `.`. After a calculation the operand may also hold
/// a formatted result such as `-5` or `Infinity`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operand {
    text: String,
}

impl Operand {
    /// Creates an empty operand ("no value entered")
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an operand holding `text` verbatim
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the operand text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if the operand already has a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.text.contains('.')
    }

    /// Appends a digit or decimal point.
    ///
    /// Returns false (and leaves the operand untouched) for a second `.` or
    /// for any token that is not `0`-`9` or `.`. A lone `"0"` is replaced
    /// rather than extended, so `0` then `5` reads `5`.
    pub fn push(&mut self, token: char) -> bool {
        match token {
            '.' if self.has_decimal_point() => false,
            '.' => {
                self.text.push('.');
                true
            }
            '0'..='9' => {
                if self.text == "0" {
                    self.text.clear();
                }
                self.text.push(token);
                true
            }
            _ => false,
        }
    }

    /// Removes the last character; returns false if the operand was empty
    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Clears the operand
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Moves the text out, leaving the operand empty
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Parses the operand as a number, if it is one yet
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        parse_operand(&self.text)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
