//! Calculator controller
//!
//! Owns the running calculation: the operand being typed, the operand
//! waiting on the left of a pending operator, that operator, and the history
//! of completed calculations. Every input event mutates this state in place
//! and then notifies subscribed display surfaces and history logs.
//!
//! State machine:
//!
//! ```text
//! operand entry --choose_operation--> operator pending --digits--> operand entry
//!       ^                                                             |
//!       +------------------- calculate / choose_operation ------------+
//! any state --reset / divide by zero--> cleared
//! ```

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::CalculatorConfig;
use crate::core::history::{History, HistoryEntry};
use crate::core::number::{format_number, round_to_precision};
use crate::core::{CalcError, CalcResult, Operand, Operation};
use crate::input::InputEvent;
use crate::observer::{DisplaySurface, HistoryLog};

/// Text shown when no operand has been entered
pub const EMPTY_DISPLAY: &str = "0";

/// The calculator state holder
pub struct CalculatorController {
    current: Operand,
    previous: Operand,
    operation: Option<Operation>,
    history: History,
    config: CalculatorConfig,
    /// Text most recently sent to display surfaces
    shown: String,
    displays: Vec<Box<dyn DisplaySurface>>,
    logs: Vec<Box<dyn HistoryLog>>,
}

impl fmt::Debug for CalculatorController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorController")
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("operation", &self.operation)
            .field("history", &self.history)
            .field("config", &self.config)
            .field("shown", &self.shown)
            .field("displays", &self.displays.len())
            .field("logs", &self.logs.len())
            .finish()
    }
}

impl Default for CalculatorController {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorController {
    /// Creates a controller with default settings and no subscribers
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a controller with custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            current: Operand::new(),
            previous: Operand::new(),
            operation: None,
            history: History::new(),
            config,
            shown: EMPTY_DISPLAY.to_string(),
            displays: Vec::new(),
            logs: Vec::new(),
        }
    }

    /// Subscribes a display surface and renders the current text to it
    pub fn subscribe_display(&mut self, surface: impl DisplaySurface + 'static) {
        let mut surface: Box<dyn DisplaySurface> = Box::new(surface);
        surface.render(&self.shown);
        self.displays.push(surface);
    }

    /// Subscribes a history log and publishes the current history to it
    pub fn subscribe_history(&mut self, log: impl HistoryLog + 'static) {
        let mut log: Box<dyn HistoryLog> = Box::new(log);
        log.publish(&self.history);
        self.logs.push(log);
    }

    // ===== Accessors =====

    /// Returns the operand being typed
    #[must_use]
    pub fn current_operand(&self) -> &str {
        self.current.as_str()
    }

    /// Returns the operand waiting on the left of the pending operator
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        self.previous.as_str()
    }

    /// Returns the pending operator, if any
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Returns the calculation history
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns true if the controller is in its canonical empty state
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.current.is_empty()
            && self.previous.is_empty()
            && self.operation.is_none()
            && self.history.is_empty()
    }

    /// Returns the text the display currently shows.
    ///
    /// Right after an operator is chosen this is the `"<previous> <op>"`
    /// prompt; after any other refresh it is the current operand, or `0`
    /// when that is empty.
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.shown
    }

    // ===== Operations =====

    /// Dispatches a classified input event
    ///
    /// Returns the history entry when the event completed a calculation.
    pub fn handle(&mut self, event: InputEvent) -> CalcResult<Option<HistoryEntry>> {
        match event {
            InputEvent::Digit(token) => {
                self.append_digit(token);
                Ok(None)
            }
            InputEvent::Operator(op) => self.choose_operation(op),
            InputEvent::Equals => self.calculate(),
            InputEvent::Backspace => {
                self.backspace();
                Ok(None)
            }
            InputEvent::Clear => {
                self.reset();
                Ok(None)
            }
        }
    }

    /// Appends a digit (`0`-`9`) or decimal point to the current operand
    pub fn append_digit(&mut self, token: char) {
        if !self.current.push(token) {
            debug!(%token, operand = %self.current, "digit ignored");
            return;
        }
        self.render(&self.operand_text());
    }

    /// Selects the pending operator.
    ///
    /// Does nothing while the current operand is empty. If an operator is
    /// already pending the existing calculation is folded first, so
    /// `3 + 4 + 5` evaluates left to right. When that fold divides by zero
    /// the state has been reset and the new operator is not applied.
    ///
    /// Returns the entry recorded by the fold, if one happened.
    pub fn choose_operation(&mut self, op: Operation) -> CalcResult<Option<HistoryEntry>> {
        if self.current.is_empty() {
            debug!(%op, "operator ignored: no operand entered");
            return Ok(None);
        }

        let folded = if self.previous.is_empty() {
            None
        } else {
            self.calculate()?
        };

        self.operation = Some(op);
        self.previous = self.current.take();
        debug!(%op, previous = %self.previous, "operator pending");
        self.render(&prompt(&self.previous, op));
        Ok(folded)
    }

    /// Applies the pending operator to the two operands.
    ///
    /// Returns `Ok(None)` without touching state when either operand is not
    /// a number yet or no operator is pending. Division by zero resets the
    /// whole calculator and returns [`CalcError::DivisionByZero`].
    pub fn calculate(&mut self) -> CalcResult<Option<HistoryEntry>> {
        let (Some(previous), Some(current)) = (self.previous.value(), self.current.value()) else {
            debug!(
                previous = %self.previous,
                current = %self.current,
                "calculate ignored: operand missing"
            );
            return Ok(None);
        };
        let Some(op) = self.operation else {
            debug!("calculate ignored: no operator pending");
            return Ok(None);
        };

        let raw = match op.apply(previous, current) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(previous, current, %op, "{err}; resetting calculator");
                self.reset();
                return Err(err);
            }
        };

        let result = format_number(round_to_precision(raw, self.config.precision));
        if !raw.is_finite() {
            warn!(previous, current, %op, %result, "non-finite result");
        }

        let entry = HistoryEntry::new(
            self.previous.as_str(),
            op,
            format_number(current),
            result.as_str(),
        );
        info!(entry = %entry.display(), "calculated");

        self.current = Operand::from_text(result);
        self.history.push(entry.clone());
        self.publish();

        self.operation = None;
        self.previous.clear();
        self.render(&self.operand_text());
        Ok(Some(entry))
    }

    /// Removes the last character of the current operand
    pub fn backspace(&mut self) {
        if !self.current.pop() {
            debug!("backspace ignored: operand empty");
            return;
        }
        self.render(&self.operand_text());
    }

    /// Clears both operands, the pending operator and the whole history
    pub fn reset(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.operation = None;
        self.history.clear();
        debug!("calculator reset");
        self.render(EMPTY_DISPLAY);
        self.publish();
    }

    // ===== Notifications =====

    fn operand_text(&self) -> String {
        if self.current.is_empty() {
            EMPTY_DISPLAY.to_string()
        } else {
            self.current.to_string()
        }
    }

    fn render(&mut self, text: &str) {
        text.clone_into(&mut self.shown);
        for surface in &mut self.displays {
            surface.render(text);
        }
    }

    fn publish(&mut self) {
        for log in &mut self.logs {
            log.publish(&self.history);
        }
    }
}

fn prompt(previous: &Operand, op: Operation) -> String {
    format!("{previous} {op}")
}
