//! Subcommand execution
//!
//! `keys` replays a script against a fresh controller and renders the result;
//! `tui` runs the interactive terminal frontend.

use std::io::{self, Write};

use console::style;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keycalc::controller::CalculatorController;
use keycalc::core::history::{History, HistoryEntry};
use keycalc::input::InputEvent;
use keycalc::tui::{render, CalculatorApp, InputHandler, KeyAction};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::commands::{KeysArgs, TuiArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Display after a single replayed key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    /// Key label as shown on the keypad
    pub key: String,
    /// Display text after the key
    pub display: String,
}

/// Outcome of replaying a key script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyReplay {
    /// Final display text
    pub display: String,
    /// Final history, oldest first
    pub history: Vec<HistoryEntry>,
    /// Alerts raised during the replay, in order
    pub alerts: Vec<String>,
    /// Per-key displays
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<ReplayStep>,
}

/// Classify every character of `sequence`, skipping whitespace
pub fn parse_sequence(sequence: &str) -> CliResult<Vec<InputEvent>> {
    sequence
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, c)| {
            InputEvent::from_script_char(c).ok_or_else(|| {
                CliError::invalid_argument(format!("unknown key '{c}' at position {position}"))
            })
        })
        .collect()
}

/// Replay `events` on a fresh controller
///
/// Errors never stop the replay: the controller has already reset itself and
/// the alert is recorded, the same as a user dismissing it and typing on.
#[must_use]
pub fn replay(events: &[InputEvent], config: &CliConfig, record_steps: bool) -> KeyReplay {
    let mut controller = CalculatorController::with_config(config.calculator_config());
    let mut alerts = Vec::new();
    let mut steps = Vec::new();

    for &event in events {
        if let Err(err) = controller.handle(event) {
            debug!(key = %event, "replay raised alert");
            alerts.push(err.alert_message());
        }
        if record_steps {
            steps.push(ReplayStep {
                key: event.label(),
                display: controller.display_text().to_string(),
            });
        }
    }

    KeyReplay {
        display: controller.display_text().to_string(),
        history: controller.history().entries().to_vec(),
        alerts,
        steps,
    }
}

/// Human-readable rendering of a replay
#[must_use]
pub fn render_text(replay: &KeyReplay, config: &CliConfig) -> String {
    let color = config.color.should_color();
    let mut out = String::new();

    for step in &replay.steps {
        out.push_str(&format!("{:>3}  {}\n", step.key, step.display));
    }

    if config.verbosity.is_quiet() {
        out.push_str(&replay.display);
        out.push('\n');
        return out;
    }

    let display = if color {
        style(&replay.display).bold().to_string()
    } else {
        replay.display.clone()
    };
    out.push_str(&format!("Display: {display}\n"));

    let mut history = History::new();
    for entry in &replay.history {
        history.push(entry.clone());
    }
    out.push_str(&history.transcript());
    out
}

/// JSON rendering of a replay
pub fn render_json(replay: &KeyReplay) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(replay)?)
}

/// Run the `keys` subcommand
pub fn run_keys(config: &CliConfig, args: &KeysArgs) -> CliResult<()> {
    let events = parse_sequence(&args.sequence)?;
    info!(keys = events.len(), "replaying key sequence");
    let result = replay(&events, config, args.steps);

    let err_color = config.color.should_color_stderr();
    let mut stderr = io::stderr().lock();
    for alert in &result.alerts {
        if err_color {
            writeln!(stderr, "{}", style(alert).red().bold())?;
        } else {
            writeln!(stderr, "{alert}")?;
        }
    }

    let rendered = if args.json {
        render_json(&result)?
    } else {
        render_text(&result, config)
    };

    let mut stdout = io::stdout().lock();
    write!(stdout, "{rendered}")?;
    if args.json {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Raw mode, alternate screen and (optionally) mouse capture, undone on drop
///
/// Restoring runs every step even when an earlier one fails, so a failed
/// `disable_raw_mode` still leaves the alternate screen.
#[derive(Debug)]
struct TerminalSession {
    mouse: bool,
    active: bool,
}

impl TerminalSession {
    fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on an early return drops the session and restores.
        let session = Self {
            mouse,
            active: true,
        };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Ok(session)
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut stdout = io::stdout();
        first_error([
            disable_raw_mode(),
            if self.mouse {
                execute!(stdout, DisableMouseCapture)
            } else {
                Ok(())
            },
            execute!(stdout, LeaveAlternateScreen),
            execute!(stdout, Show),
        ])
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(%err, "terminal restore failed");
        }
    }
}

/// First error among already-run steps
fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().collect()
}

/// Run the `tui` subcommand
pub fn run_tui(config: &CliConfig, args: &TuiArgs) -> CliResult<()> {
    let mut session = TerminalSession::enter(!args.no_mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = CalculatorApp::with_config(config.calculator_config());
    info!("tui session started");
    let result = run_app(&mut terminal, &mut app);
    let restored = session.restore();

    info!(
        calculations = app.controller().history().len(),
        "tui session ended"
    );
    result?;
    restored.map_err(CliError::from)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
) -> CliResult<()> {
    let input_handler = InputHandler::new();
    let mut viewport = Rect::default();

    loop {
        terminal.draw(|f| {
            viewport = f.area();
            render(app, f);
        })?;

        let action = match event::read()? {
            Event::Key(key) => input_handler.handle_key(key),
            Event::Mouse(mouse) => input_handler.handle_mouse(mouse),
            _ => KeyAction::None,
        };
        app.handle_action(action, viewport);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
