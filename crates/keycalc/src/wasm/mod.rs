//! Browser frontend
//!
//! The page model and driver are always compiled so the browser wiring can
//! be exercised natively; the real bindings need the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, HISTORY_ID, KEYPAD_ID};
pub use driver::WasmDriver;
pub use keypad::{button_element, handle_click, keypad_element, MockDomKeypadExt};
