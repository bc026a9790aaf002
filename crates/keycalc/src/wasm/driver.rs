//! Browser frontend driver over the mock DOM
//!
//! Wires a [`CalculatorController`] to a [`MockDom`] the same way the real
//! page is wired: display text goes into `#display`, history snapshots
//! rebuild `#history`, and division by zero raises `window.alert`.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, HISTORY_ID};
use super::keypad::{handle_click, MockDomKeypadExt};
use crate::config::CalculatorConfig;
use crate::controller::CalculatorController;
use crate::core::history::History;
use crate::driver::CalculatorDriver;
use crate::input::InputEvent;
use crate::keypad::Keypad;

/// Browser driver backed by a mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    controller: CalculatorController,
    dom: Rc<RefCell<MockDom>>,
    keypad: Keypad,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over a fresh calculator page
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a driver with custom calculator configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        let keypad = Keypad::new();
        let mut page = MockDom::calculator();
        page.add_keypad(&keypad);
        let dom = Rc::new(RefCell::new(page));

        let mut controller = CalculatorController::with_config(config);
        let sink = Rc::clone(&dom);
        controller.subscribe_display(move |text: &str| {
            sink.borrow_mut().set_value(DISPLAY_ID, text);
        });
        let sink = Rc::clone(&dom);
        controller.subscribe_history(move |history: &History| {
            let mut dom = sink.borrow_mut();
            dom.clear_children(HISTORY_ID);
            for (index, entry) in history.iter().enumerate() {
                dom.append_child(
                    HISTORY_ID,
                    DomElement::new("li")
                        .with_id(&format!("history-{index}"))
                        .with_text(&entry.display()),
                );
            }
        });

        Self {
            controller,
            dom,
            keypad,
        }
    }

    /// Returns a borrow of the page
    #[must_use]
    pub fn dom(&self) -> std::cell::Ref<'_, MockDom> {
        self.dom.borrow()
    }

    /// Dispatches a page event the way the browser listeners would
    pub fn dispatch(&mut self, event: DomEvent) {
        let input = match &event {
            DomEvent::Click { element_id } => handle_click(&self.keypad, element_id),
            DomEvent::KeyDown { key } => InputEvent::from_key(key),
        };
        self.dom.borrow_mut().log_event(event);

        let Some(input) = input else {
            debug!("unmapped page event");
            return;
        };
        if let Err(err) = self.controller.handle(input) {
            self.dom.borrow_mut().alert(&err.alert_message());
        }
    }

    /// Clicks the element with `id`
    pub fn click(&mut self, id: &str) {
        self.dispatch(DomEvent::click(id));
    }

    /// Sends a `keydown` with `KeyboardEvent.key` = `key`
    pub fn key_down(&mut self, key: &str) {
        self.dispatch(DomEvent::key_down(key));
    }
}

impl CalculatorDriver for WasmDriver {
    fn press_event(&mut self, event: InputEvent) {
        let id = self
            .keypad
            .find_by_event(event)
            .and_then(|index| self.keypad.get_button(index))
            .map(|btn| btn.id);
        match id {
            Some(id) => self.click(id),
            None => debug!(%event, "no button for event"),
        }
    }

    fn display(&self) -> String {
        self.dom
            .borrow()
            .value(DISPLAY_ID)
            .unwrap_or_default()
            .to_string()
    }

    fn history(&self) -> Vec<String> {
        self.dom.borrow().child_texts(HISTORY_ID)
    }

    fn last_alert(&self) -> Option<String> {
        self.dom.borrow().alerts().last().cloned()
    }

    fn controller(&self) -> &CalculatorController {
        &self.controller
    }
}
