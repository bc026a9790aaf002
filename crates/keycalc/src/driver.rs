//! Unified calculator driver
//!
//! Write the interaction script once, run it against every frontend. Each
//! frontend wraps its own event plumbing in a [`CalculatorDriver`]; the
//! `verify_*` functions below only talk to that trait.
//!
//! ```rust
//! use keycalc::driver::{run_all_verifications, CalculatorDriver};
//! use keycalc::wasm::WasmDriver;
//!
//! let mut driver = WasmDriver::new();
//! run_all_verifications(&mut driver);
//! ```

use crate::controller::CalculatorController;
use crate::input::InputEvent;

/// Frontend-independent calculator interactions
pub trait CalculatorDriver {
    /// Delivers one input through the frontend's event path.
    ///
    /// An alert left open by a previous input is acknowledged first.
    fn press_event(&mut self, event: InputEvent);

    /// Returns what the frontend's display shows
    fn display(&self) -> String;

    /// Returns the history as shown by the frontend, oldest first
    fn history(&self) -> Vec<String>;

    /// Returns the most recent alert the frontend showed
    fn last_alert(&self) -> Option<String>;

    /// Returns the controller behind the frontend
    fn controller(&self) -> &CalculatorController;

    /// Presses Clear
    fn clear(&mut self) {
        self.press_event(InputEvent::Clear);
    }

    /// Presses each scripted key in order; unmapped characters are skipped
    fn press_keys(&mut self, script: &str) {
        for event in script.chars().filter_map(InputEvent::from_script_char) {
            self.press_event(event);
        }
    }
}

/// Terminal frontend driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::layout::Rect;

    use super::CalculatorDriver;
    use crate::controller::CalculatorController;
    use crate::input::InputEvent;
    use crate::tui::{CalculatorApp, KeyAction};

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    /// Driver feeding key actions into a [`CalculatorApp`]
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press_event(&mut self, event: InputEvent) {
            if self.app.alert().is_some() {
                self.app.handle_action(KeyAction::Calculator(InputEvent::Clear), VIEWPORT);
            }
            self.app.handle_action(KeyAction::Calculator(event), VIEWPORT);
        }

        fn display(&self) -> String {
            self.app.display()
        }

        fn history(&self) -> Vec<String> {
            self.app.history_lines()
        }

        fn last_alert(&self) -> Option<String> {
            self.app.last_error().map(|err| err.alert_message())
        }

        fn controller(&self) -> &CalculatorController {
            self.app.controller()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified verifications =====

/// Typed digits show verbatim, minus a leading zero and second decimal point
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("051.2.");
    assert_eq!(driver.display(), "51.2");
    assert_eq!(driver.controller().current_operand(), "51.2");
}

/// An operator with nothing typed changes nothing, however often it is pressed
pub fn verify_empty_operator_is_noop<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("+×^");
    assert!(driver.controller().is_cleared());
    assert_eq!(driver.display(), "0");
}

/// `6 ÷ 3 =` shows 2 and records one entry
pub fn verify_division<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("6/3=");
    assert_eq!(driver.display(), "2");
    assert_eq!(driver.history(), vec!["6 ÷ 3 = 2"]);
    assert_eq!(driver.controller().operation(), None);
    assert_eq!(driver.controller().previous_operand(), "");
}

/// Dividing by zero alerts and wipes everything, history included
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("1+1=");
    driver.press_keys("/0=");
    assert_eq!(
        driver.last_alert().as_deref(),
        Some("Error: Cannot divide by zero!")
    );
    assert!(driver.controller().is_cleared());
    assert_eq!(driver.display(), "0");
    assert!(driver.history().is_empty());
}

/// Chained operators fold left to right
pub fn verify_left_to_right<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("7+2+1=");
    assert_eq!(driver.display(), "10");
    assert_eq!(driver.history(), vec!["7 + 2 = 9", "9 + 1 = 10"]);
}

/// Binary float noise is rounded away
pub fn verify_decimal_rounding<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("0.1+0.2=");
    assert_eq!(driver.display(), "0.3");
}

/// Backspace drops one character and does nothing on an empty operand
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("12<");
    assert_eq!(driver.display(), "1");
    driver.press_keys("<<");
    assert_eq!(driver.display(), "0");
    assert!(driver.controller().is_cleared());
}

/// Clear always lands on the empty state
pub fn verify_reset<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys("9*9=+3");
    driver.clear();
    assert!(driver.controller().is_cleared());
    assert_eq!(driver.display(), "0");
    assert!(driver.history().is_empty());
}

/// Runs every verification in sequence on one driver
pub fn run_all_verifications<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_empty_operator_is_noop(driver);
    verify_division(driver);
    verify_divide_by_zero(driver);
    verify_left_to_right(driver);
    verify_decimal_rounding(driver);
    verify_backspace(driver);
    verify_reset(driver);
}
