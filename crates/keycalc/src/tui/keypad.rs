//! Keypad widget for the terminal frontend
//!
//! Draws the shared [`Keypad`] layout as a bordered grid and maps mouse
//! clicks back to buttons.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{ButtonKind, Keypad, KeypadButton};

impl Keypad {
    /// Converts a click position inside `area` to a button index.
    ///
    /// `area` is the full widget area including its one-cell border.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let (rows, cols) = self.dimensions();
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / cols as u16;
        let btn_height = (area.height - 2) / rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        if row < rows && col < cols {
            Some(row * cols + col)
        } else {
            None
        }
    }
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match btn.kind {
        ButtonKind::Number => Style::default().fg(Color::White),
        ButtonKind::Operator => Style::default().fg(Color::Yellow),
        ButtonKind::Equals => Style::default().fg(Color::Green),
        ButtonKind::Command => Style::default().fg(Color::Red),
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 * 3 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + col as u16 * btn_width;
            let y = inner.y + row as u16 * btn_height + btn_height / 2;

            let label = format!("[{}]", btn.label());
            let label_width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(label_width) / 2;
            buf.set_span(
                label_x,
                y,
                &Span::styled(label, button_style(btn)),
                btn_width,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;

    fn rendered(keypad: &Keypad, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(keypad).render(area, &mut buf);
        buf
    }

    fn content(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== hit_test =====

    #[test]
    fn test_hit_test_corners() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 12);
        // Inner grid is 24x10, buttons are 6x2
        assert_eq!(keypad.hit_test(area, 1, 1), Some(0));
        assert_eq!(keypad.hit_test(area, 24, 10), Some(19));
    }

    #[test]
    fn test_hit_test_maps_to_event() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 5, 26, 12);
        // Row 1 col 2 is '9'
        let index = keypad.hit_test(area, 10 + 1 + 2 * 6, 5 + 1 + 2).unwrap();
        assert_eq!(
            keypad.get_button(index).unwrap().event,
            InputEvent::Digit('9')
        );
    }

    #[test]
    fn test_hit_test_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 26, 12);
        assert!(keypad.hit_test(area, 0, 0).is_none());
        assert!(keypad.hit_test(area, 100, 100).is_none());
    }

    #[test]
    fn test_hit_test_border() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 12);
        assert!(keypad.hit_test(area, 0, 5).is_none());
        assert!(keypad.hit_test(area, 5, 0).is_none());
        assert!(keypad.hit_test(area, 25, 5).is_none());
        assert!(keypad.hit_test(area, 5, 11).is_none());
    }

    #[test]
    fn test_hit_test_too_small() {
        let keypad = Keypad::new();
        assert!(keypad.hit_test(Rect::new(0, 0, 4, 4), 1, 1).is_none());
    }

    // ===== KeypadWidget =====

    #[test]
    fn test_widget_renders_labels() {
        let keypad = Keypad::new();
        let text = content(&rendered(&keypad, Rect::new(0, 0, 26, 12)));
        assert!(text.contains("Keypad"));
        for label in ["[7]", "[+]", "[÷]", "[×]", "[^]", "[=]", "[C]"] {
            assert!(text.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_widget_highlights_pressed() {
        let mut keypad = Keypad::new();
        keypad.highlight_event(InputEvent::Digit('7'));
        let buf = rendered(&keypad, Rect::new(0, 0, 26, 12));

        let highlighted = buf
            .content()
            .iter()
            .filter(|c| c.bg == Color::Yellow)
            .map(|c| c.symbol())
            .collect::<String>();
        assert_eq!(highlighted, "[7]");
    }

    #[test]
    fn test_widget_too_small_draws_border_only() {
        let keypad = Keypad::new();
        let text = content(&rendered(&keypad, Rect::new(0, 0, 8, 5)));
        assert!(!text.contains("[7]"));
    }
}
