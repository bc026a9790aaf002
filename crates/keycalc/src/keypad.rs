//! Keypad layout shared by every frontend
//!
//! ```text
//! [ C ] [ ⌫ ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ ^ ] [ = ]
//! ```
//!
//! Each button has a stable element id for the browser keypad and carries
//! the [`InputEvent`] it sends to the controller.

use crate::core::Operation;
use crate::input::InputEvent;

/// Button group, mirrored as a CSS class in the browser keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Number,
    /// Binary operators
    Operator,
    /// The equals button
    Equals,
    /// Clear and backspace
    Command,
}

impl ButtonKind {
    /// CSS class name for this group
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Number => "numbers",
            Self::Operator => "operators",
            Self::Equals => "equals",
            Self::Command => "commands",
        }
    }

    const fn of(event: InputEvent) -> Self {
        match event {
            InputEvent::Digit(_) => Self::Number,
            InputEvent::Operator(_) => Self::Operator,
            InputEvent::Equals => Self::Equals,
            InputEvent::Backspace | InputEvent::Clear => Self::Command,
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Stable element id
    pub id: &'static str,
    /// Event sent when the button is activated
    pub event: InputEvent,
    /// Button group
    pub kind: ButtonKind,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(id: &'static str, event: InputEvent) -> Self {
        Self {
            id,
            event,
            kind: ButtonKind::of(event),
            pressed: false,
        }
    }

    /// Returns the text printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.event.label()
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The 5x4 calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of rows
    pub const ROWS: usize = 5;
    /// Number of columns
    pub const COLS: usize = 4;

    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use InputEvent::{Backspace, Clear, Digit, Equals, Operator};

        let buttons = vec![
            KeypadButton::new("btn-clear", Clear),
            KeypadButton::new("btn-backspace", Backspace),
            KeypadButton::new("btn-modulo", Operator(Operation::Modulo)),
            KeypadButton::new("btn-divide", Operator(Operation::Divide)),
            KeypadButton::new("btn-7", Digit('7')),
            KeypadButton::new("btn-8", Digit('8')),
            KeypadButton::new("btn-9", Digit('9')),
            KeypadButton::new("btn-multiply", Operator(Operation::Multiply)),
            KeypadButton::new("btn-4", Digit('4')),
            KeypadButton::new("btn-5", Digit('5')),
            KeypadButton::new("btn-6", Digit('6')),
            KeypadButton::new("btn-subtract", Operator(Operation::Subtract)),
            KeypadButton::new("btn-1", Digit('1')),
            KeypadButton::new("btn-2", Digit('2')),
            KeypadButton::new("btn-3", Digit('3')),
            KeypadButton::new("btn-add", Operator(Operation::Add)),
            KeypadButton::new("btn-0", Digit('0')),
            KeypadButton::new("btn-decimal", Digit('.')),
            KeypadButton::new("btn-power", Operator(Operation::Power)),
            KeypadButton::new("btn-equals", Equals),
        ];

        Self {
            buttons,
            cols: Self::COLS,
            rows: Self::ROWS,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.id == id)
    }

    /// Finds the button that sends `event`
    #[must_use]
    pub fn find_by_event(&self, event: InputEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Returns the event for the button with element id `id`
    #[must_use]
    pub fn event_for_id(&self, id: &str) -> Option<InputEvent> {
        self.find_by_id(id)
            .and_then(|index| self.buttons.get(index))
            .map(|b| b.event)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button that sends `event`
    pub fn highlight_event(&mut self, event: InputEvent) {
        self.release_all();
        if let Some(index) = self.find_by_event(event) {
            self.press_button(index);
        }
    }

    /// Returns the index of the highlighted button, if any
    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        let cols = self.cols;
        self.buttons
            .iter()
            .enumerate()
            .map(move |(i, btn)| ((i / cols, i % cols), btn))
    }
}
