//! Browser bindings
//!
//! Binds a [`CalculatorController`] to the real page. The host page forwards
//! `keydown` keys to [`BrowserCalculator::handle_key`] and button clicks to
//! [`BrowserCalculator::handle_button`]:
//!
//! ```js
//! const calc = new BrowserCalculator();
//! window.addEventListener("keydown", (e) => {
//!   if (calc.handle_key(e.key) && e.key === "Enter") e.preventDefault();
//! });
//! document.querySelectorAll("#keypad button")
//!   .forEach((b) => b.addEventListener("click", () => calc.handle_button(b.id)));
//! ```

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlInputElement, Window};

use super::dom::DISPLAY_ID;
use crate::controller::CalculatorController;
use crate::core::history::History;
use crate::input::InputEvent;
use crate::keypad::Keypad;

/// Calculator bound to the page's `#display` input
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    controller: CalculatorController,
    keypad: Keypad,
    window: Window,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Binds to `#display` on the current page
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserCalculator, JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let display = window
            .document()
            .and_then(|doc| doc.get_element_by_id(DISPLAY_ID))
            .ok_or_else(|| JsValue::from_str("missing #display element"))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| JsValue::from_str("#display is not an input"))?;

        let mut controller = CalculatorController::new();
        controller.subscribe_display(move |text: &str| display.set_value(text));
        controller.subscribe_history(|history: &History| {
            console::log_1(&JsValue::from_str(&history.transcript()));
        });

        Ok(Self {
            controller,
            keypad: Keypad::new(),
            window,
        })
    }

    /// Handles a `KeyboardEvent.key`; returns false for keys the calculator ignores
    pub fn handle_key(&mut self, key: &str) -> bool {
        InputEvent::from_key(key).map_or(false, |event| {
            self.dispatch(event);
            true
        })
    }

    /// Handles a click on the keypad button with element id `id`
    pub fn handle_button(&mut self, id: &str) -> bool {
        self.keypad.event_for_id(id).map_or(false, |event| {
            self.dispatch(event);
            true
        })
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.controller.display_text().to_string()
    }

    /// History as a JSON array
    pub fn history_json(&self) -> String {
        self.controller
            .history()
            .to_json()
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Number of history entries
    pub fn history_count(&self) -> usize {
        self.controller.history().len()
    }

    /// History entry at `index` (0 = oldest)
    pub fn history_entry(&self, index: usize) -> Option<String> {
        self.controller.history().get(index).map(|e| e.display())
    }

    fn dispatch(&mut self, event: InputEvent) {
        if let Err(err) = self.controller.handle(event) {
            if let Err(js) = self.window.alert_with_message(&err.alert_message()) {
                console::error_1(&js);
            }
        }
    }
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"keycalc loaded".into());
}
