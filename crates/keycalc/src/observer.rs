//! Observer contract between the controller and whatever draws it
//!
//! The controller never reaches into a UI. It pushes display text and
//! history snapshots to subscribers, synchronously and in subscription
//! order. Closures subscribe directly:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use keycalc::prelude::*;
//!
//! let shown = Rc::new(RefCell::new(String::new()));
//! let sink = Rc::clone(&shown);
//!
//! let mut calc = CalculatorController::new();
//! calc.subscribe_display(move |text: &str| *sink.borrow_mut() = text.to_string());
//! calc.append_digit('7');
//! assert_eq!(*shown.borrow(), "7");
//! ```

use std::io::Write;

use crate::core::history::History;

/// Receives the text the calculator display should show
pub trait DisplaySurface {
    /// Replaces the displayed text
    fn render(&mut self, text: &str);
}

/// Receives history snapshots
pub trait HistoryLog {
    /// Called with the full history after each calculation and after reset
    fn publish(&mut self, history: &History);
}

impl<F> DisplaySurface for F
where
    F: FnMut(&str),
{
    fn render(&mut self, text: &str) {
        self(text);
    }
}

impl<F> HistoryLog for F
where
    F: FnMut(&History),
{
    fn publish(&mut self, history: &History) {
        self(history);
    }
}

/// History log that writes the numbered transcript block to a writer
#[derive(Debug)]
pub struct TranscriptLog<W: Write> {
    writer: W,
}

impl<W: Write> TranscriptLog<W> {
    /// Creates a transcript log over `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> HistoryLog for TranscriptLog<W> {
    fn publish(&mut self, history: &History) {
        let transcript = history.transcript();
        if let Err(err) = self
            .writer
            .write_all(transcript.as_bytes())
            .and_then(|()| self.writer.flush())
        {
            tracing::warn!(error = %err, "failed to write history transcript");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::{HistoryEntry, TRANSCRIPT_EMPTY};
    use crate::core::Operation;

    #[test]
    fn test_closure_display_surface() {
        let mut seen = Vec::new();
        {
            let mut surface = |text: &str| seen.push(text.to_string());
            surface.render("12");
            surface.render("12 +");
        }
        assert_eq!(seen, vec!["12", "12 +"]);
    }

    #[test]
    fn test_closure_history_log() {
        let mut sizes = Vec::new();
        {
            let mut log = |history: &History| sizes.push(history.len());
            log.publish(&History::new());
        }
        assert_eq!(sizes, vec![0]);
    }

    #[test]
    fn test_transcript_log_writes_block() {
        let mut history = History::new();
        history.push(HistoryEntry::new("1", Operation::Add, "1", "2"));

        let mut log = TranscriptLog::new(Vec::new());
        log.publish(&history);
        let written = String::from_utf8(log.into_inner()).unwrap();
        assert!(written.contains("1: 1 + 1 = 2"));
    }

    #[test]
    fn test_transcript_log_empty() {
        let mut log = TranscriptLog::new(Vec::new());
        log.publish(&History::new());
        let written = String::from_utf8(log.into_inner()).unwrap();
        assert!(written.contains(TRANSCRIPT_EMPTY));
    }
}
