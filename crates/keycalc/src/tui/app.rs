//! Terminal application state
//!
//! The app owns a [`CalculatorController`] and mirrors what it publishes
//! into a [`Screen`] through observer closures. Rendering reads the screen,
//! never the controller.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::layout::Rect;
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::controller::CalculatorController;
use crate::core::history::{History, HistoryEntry};
use crate::core::{CalcError, CalcResult};
use crate::input::InputEvent;
use crate::keypad::Keypad;

use super::input::KeyAction;
use super::ui;

/// What the terminal currently shows, as last published by the controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    /// Display line
    pub display: String,
    /// History lines, oldest first
    pub history: Vec<String>,
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    controller: CalculatorController,
    screen: Rc<RefCell<Screen>>,
    keypad: Keypad,
    /// Blocking notification; the next key press acknowledges it
    alert: Option<String>,
    last_error: Option<CalcError>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator app with custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        let screen = Rc::new(RefCell::new(Screen::default()));
        let mut controller = CalculatorController::with_config(config);

        let sink = Rc::clone(&screen);
        controller.subscribe_display(move |text: &str| {
            sink.borrow_mut().display = text.to_string();
        });
        let sink = Rc::clone(&screen);
        controller.subscribe_history(move |history: &History| {
            sink.borrow_mut().history = history.lines();
        });

        Self {
            controller,
            screen,
            keypad: Keypad::new(),
            alert: None,
            last_error: None,
            should_quit: false,
        }
    }

    /// Returns the display line
    #[must_use]
    pub fn display(&self) -> String {
        self.screen.borrow().display.clone()
    }

    /// Returns the history lines, oldest first
    #[must_use]
    pub fn history_lines(&self) -> Vec<String> {
        self.screen.borrow().history.clone()
    }

    /// Returns a snapshot of the screen model
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen.borrow().clone()
    }

    /// Returns the underlying controller
    #[must_use]
    pub fn controller(&self) -> &CalculatorController {
        &self.controller
    }

    /// Returns the keypad with its highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the pending alert text, if one is showing
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Returns the most recent calculator error
    #[must_use]
    pub fn last_error(&self) -> Option<CalcError> {
        self.last_error
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dismisses the alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Sends one input to the controller and highlights its button.
    ///
    /// A calculator error opens the alert in addition to being returned.
    pub fn press(&mut self, event: InputEvent) -> CalcResult<Option<HistoryEntry>> {
        self.keypad.highlight_event(event);
        let result = self.controller.handle(event);
        if let Err(err) = &result {
            self.alert = Some(err.alert_message());
            self.last_error = Some(*err);
        }
        result
    }

    /// Presses the keypad button under terminal cell (x, y)
    pub fn click(&mut self, viewport: Rect, x: u16, y: u16) -> Option<InputEvent> {
        let keypad_area = ui::layout(viewport).keypad;
        let event = self
            .keypad
            .hit_test(keypad_area, x, y)
            .and_then(|index| self.keypad.get_button(index))
            .map(|btn| btn.event)?;
        // Errors surface through the alert
        let _ = self.press(event);
        Some(event)
    }

    /// Applies a terminal action.
    ///
    /// While an alert is showing, any key or click only dismisses it.
    /// `viewport` is the full terminal area, needed to hit-test clicks.
    pub fn handle_action(&mut self, action: KeyAction, viewport: Rect) {
        if action == KeyAction::Quit {
            self.quit();
            return;
        }
        if action == KeyAction::None {
            return;
        }
        if self.alert.is_some() {
            debug!("alert acknowledged");
            self.dismiss_alert();
            return;
        }
        match action {
            KeyAction::Calculator(event) => {
                let _ = self.press(event);
            }
            KeyAction::Click(x, y) => {
                self.click(viewport, x, y);
            }
            KeyAction::Quit | KeyAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn press_all(app: &mut CalculatorApp, script: &str) {
        for c in script.chars() {
            if let Some(event) = InputEvent::from_script_char(c) {
                app.handle_action(KeyAction::Calculator(event), VIEWPORT);
            }
        }
    }

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.display(), "0");
        assert!(app.history_lines().is_empty());
        assert!(app.alert().is_none());
        assert!(!app.should_quit());
        assert!(app.controller().is_cleared());
    }

    #[test]
    fn test_app_default() {
        let app = CalculatorApp::default();
        assert_eq!(app.screen(), Screen { display: "0".into(), history: Vec::new() });
    }

    #[test]
    fn test_app_with_config() {
        let mut app = CalculatorApp::with_config(CalculatorConfig::new().with_precision(3));
        press_all(&mut app, "1/3=");
        assert_eq!(app.display(), "0.333");
    }

    #[test]
    fn test_display_follows_controller() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, "12+");
        assert_eq!(app.display(), "12 +");
        press_all(&mut app, "3");
        assert_eq!(app.display(), "3");
        press_all(&mut app, "=");
        assert_eq!(app.display(), "15");
        assert_eq!(app.history_lines(), vec!["12 + 3 = 15"]);
    }

    #[test]
    fn test_press_highlights_button() {
        let mut app = CalculatorApp::new();
        app.press(InputEvent::Operator(Operation::Multiply)).unwrap();
        let index = app.keypad().pressed_index().unwrap();
        assert_eq!(
            app.keypad().get_button(index).unwrap().event,
            InputEvent::Operator(Operation::Multiply)
        );
    }

    #[test]
    fn test_divide_by_zero_opens_alert() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, "5+5=");
        press_all(&mut app, "/0=");

        assert_eq!(app.alert(), Some("Error: Cannot divide by zero!"));
        assert_eq!(app.last_error(), Some(CalcError::DivisionByZero));
        assert_eq!(app.display(), "0");
        assert!(app.history_lines().is_empty());
    }

    #[test]
    fn test_alert_swallows_next_key() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, "1/0=");
        assert!(app.alert().is_some());

        press_all(&mut app, "7");
        assert!(app.alert().is_none());
        assert_eq!(app.display(), "0");

        press_all(&mut app, "7");
        assert_eq!(app.display(), "7");
    }

    #[test]
    fn test_quit_bypasses_alert() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, "1/0=");
        app.handle_action(KeyAction::Quit, VIEWPORT);
        assert!(app.should_quit());
    }

    #[test]
    fn test_none_action_keeps_alert() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, "1/0=");
        app.handle_action(KeyAction::None, VIEWPORT);
        assert!(app.alert().is_some());
    }

    #[test]
    fn test_click_presses_button() {
        let mut app = CalculatorApp::new();
        let area = ui::layout(VIEWPORT).keypad;
        // Centre of the first button of the second row ('7')
        let (rows, cols) = app.keypad().dimensions();
        let btn_w = (area.width - 2) / cols as u16;
        let btn_h = (area.height - 2) / rows as u16;
        let x = area.x + 1 + btn_w / 2;
        let y = area.y + 1 + btn_h + btn_h / 2;

        app.handle_action(KeyAction::Click(x, y), VIEWPORT);
        assert_eq!(app.display(), "7");
    }

    #[test]
    fn test_click_outside_keypad_is_ignored() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.click(VIEWPORT, 0, 0), None);
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn test_dismiss_alert() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, "2/0=");
        app.dismiss_alert();
        assert!(app.alert().is_none());
        assert_eq!(app.last_error(), Some(CalcError::DivisionByZero));
    }
}
