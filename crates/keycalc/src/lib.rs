//! keycalc - keypad calculator
//!
//! A two-operand calculator driven one key at a time, the way a pocket or
//! browser calculator is: type an operand, pick an operator, type another,
//! press `=`. Chained operators fold left to right, results are rounded to
//! a fixed number of decimal places, and every completed calculation lands
//! in an append-only history.
//!
//! The [`CalculatorController`](controller::CalculatorController) holds all
//! state and knows nothing about screens. Frontends subscribe to it:
//!
//! - [`tui`] renders into a terminal with ratatui (feature `tui`)
//! - [`wasm`] binds to a browser page (feature `wasm`), with a mock DOM
//!   that is always available for tests
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut calc = CalculatorController::new();
//! for key in "7+2+1=".chars() {
//!     if let Some(event) = InputEvent::from_script_char(key) {
//!         calc.handle(event).unwrap();
//!     }
//! }
//! assert_eq!(calc.current_operand(), "10");
//! assert_eq!(calc.history().lines(), vec!["7 + 2 = 9", "9 + 1 = 10"]);
//!
//! calc.reset();
//! calc.append_digit('8');
//! calc.choose_operation(Operation::Divide).unwrap();
//! calc.append_digit('0');
//! assert_eq!(calc.calculate(), Err(CalcError::DivisionByZero));
//! assert!(calc.is_cleared());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![warn(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
pub mod input;
pub mod keypad;
pub mod observer;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser frontend; the mock page is always compiled for testing
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::controller::CalculatorController;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::number::{format_number, parse_operand, round_to_precision};
    pub use crate::core::{CalcError, CalcResult, Operand, Operation};
    pub use crate::driver::CalculatorDriver;
    pub use crate::input::InputEvent;
    pub use crate::keypad::{ButtonKind, Keypad, KeypadButton};
    pub use crate::observer::{DisplaySurface, HistoryLog, TranscriptLog};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = CalculatorController::with_config(CalculatorConfig::default());
        calc.append_digit('6');
        calc.choose_operation(Operation::Multiply).unwrap();
        calc.append_digit('7');
        let entry = calc.calculate().unwrap().unwrap();
        assert_eq!(entry, HistoryEntry::new("6", Operation::Multiply, "7", "42"));
    }

    #[test]
    fn test_number_helpers_exported() {
        assert_eq!(parse_operand("2.5"), Some(2.5));
        assert_eq!(format_number(round_to_precision(0.1 + 0.2, 10)), "0.3");
    }

    #[test]
    fn test_transcript_log_subscribes() {
        use std::cell::RefCell;
        use std::io::Write;
        use std::rc::Rc;

        #[derive(Clone, Default)]
        struct Shared(Rc<RefCell<Vec<u8>>>);

        impl Write for Shared {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.borrow_mut().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let out = Shared::default();
        let mut calc = CalculatorController::new();
        calc.subscribe_history(TranscriptLog::new(out.clone()));
        calc.append_digit('1');
        calc.choose_operation(Operation::Add).unwrap();
        calc.append_digit('1');
        calc.calculate().unwrap();

        let written = String::from_utf8(out.0.borrow().clone()).unwrap();
        assert!(written.starts_with("--- Calculator History ---\nNo history yet.\n"));
        assert!(written.contains("1: 1 + 1 = 2"));
    }

    #[test]
    fn test_drivers_agree() {
        let mut wasm = WasmDriver::new();
        wasm.press_keys("12+30=");
        assert_eq!(wasm.display(), "42");

        #[cfg(feature = "tui")]
        {
            let mut tui = TuiDriver::new();
            tui.press_keys("12+30=");
            assert_eq!(tui.display(), wasm.display());
            assert_eq!(tui.history(), wasm.history());
        }
    }
}
