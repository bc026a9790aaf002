//! Terminal frontend built on ratatui and crossterm

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{CalculatorApp, Screen};
pub use input::{InputHandler, KeyAction};
pub use keypad::KeypadWidget;
pub use ui::{layout, render, CalculatorUI, UiLayout};
