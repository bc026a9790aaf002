//! Terminal rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget, Wrap},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Window title
pub const TITLE: &str = " keycalc ";

/// Key bindings shown under the history
pub const HELP_LINE: &str = "Enter/= calc  Esc clear  ⌫ delete  Ctrl+C quit";

const KEYPAD_WIDTH: u16 = 26;
const KEYPAD_HEIGHT: u16 = 12;

/// Screen regions for a given terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Display line
    pub display: Rect,
    /// History list
    pub history: Rect,
    /// Key binding hint
    pub help: Rect,
    /// Keypad grid, including its border
    pub keypad: Rect,
}

/// Splits the terminal area into the calculator regions
#[must_use]
pub fn layout(area: Rect) -> UiLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Min(30), Constraint::Length(KEYPAD_WIDTH)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(KEYPAD_HEIGHT), Constraint::Min(0)])
        .split(columns[1]);

    UiLayout {
        display: left[0],
        history: left[1],
        help: left[2],
        keypad: right[0],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorUI::new(app), frame.area());
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.display(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let lines = self.app.history_lines();
        let items: Vec<ListItem> = if lines.is_empty() {
            vec![ListItem::new(Span::styled(
                "No history yet.",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            // Newest at the bottom; keep the tail when it overflows
            let visible = usize::from(area.height.saturating_sub(2));
            let skip = lines.len().saturating_sub(visible);
            lines
                .iter()
                .enumerate()
                .skip(skip)
                .map(|(index, line)| {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{:>3}: ", index + 1), Style::default().fg(Color::DarkGray)),
                        Span::styled(line.as_str(), Style::default().fg(Color::Cyan)),
                    ]))
                })
                .collect()
        };

        List::new(items)
            .block(
                Block::default()
                    .title(" History ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_alert(&self, message: &str, area: Rect, buf: &mut Buffer) {
        let popup = centered(area, 40, 5);
        Clear.render(popup, buf);
        Paragraph::new(vec![
            Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "press any key",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Alert ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .render(popup, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = layout(area);
        self.render_display(regions.display, buf);
        self.render_history(regions.history, buf);
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::Gray)))
            .render(regions.help, buf);
        KeypadWidget::new(self.app.keypad()).render(regions.keypad, buf);

        if let Some(message) = self.app.alert() {
            self.render_alert(message, area, buf);
        }
    }
}

/// Rect of at most `width` x `height` centred in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
