//! Keypad markup for the browser frontend
//!
//! Generates `<button>` elements for the shared [`Keypad`] layout and maps
//! clicks on them back to input events.

use super::dom::{DomElement, MockDom, KEYPAD_ID};
use crate::input::InputEvent;
use crate::keypad::{Keypad, KeypadButton};

/// Builds the `<button>` element for one keypad button
#[must_use]
pub fn button_element(btn: &KeypadButton, row: usize, col: usize) -> DomElement {
    DomElement::new("button")
        .with_id(btn.id)
        .with_text(&btn.label())
        .with_class(btn.kind.class_name())
        .with_attr("data-row", &row.to_string())
        .with_attr("data-col", &col.to_string())
}

/// Builds the keypad container with every button as a child
#[must_use]
pub fn keypad_element(keypad: &Keypad) -> DomElement {
    keypad
        .buttons_with_positions()
        .fold(
            DomElement::new("div").with_id(KEYPAD_ID).with_class("keypad"),
            |container, ((row, col), btn)| container.with_child(button_element(btn, row, col)),
        )
}

/// Maps a click on element `element_id` to its input event
#[must_use]
pub fn handle_click(keypad: &Keypad, element_id: &str) -> Option<InputEvent> {
    keypad.event_for_id(element_id)
}

/// Adds keypad markup to a [`MockDom`]
pub trait MockDomKeypadExt {
    /// Registers the keypad container and each of its buttons
    fn add_keypad(&mut self, keypad: &Keypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &Keypad) {
        let container = keypad_element(keypad);
        let buttons = container.children.clone();
        self.insert(container);
        for button in buttons {
            self.insert(button);
        }
    }
}
