//! Calculation history
//!
//! An append-only, chronologically ordered log of completed calculations.
//! Entries are never reordered or deduplicated; the only way to remove them
//! is to clear the whole log.

use serde::{Deserialize, Serialize};

use super::Operation;

/// Header line of the history transcript
pub const TRANSCRIPT_HEADER: &str = "--- Calculator History ---";
/// Footer line of the history transcript
pub const TRANSCRIPT_FOOTER: &str = "--------------------------";
/// Transcript body when nothing has been calculated
pub const TRANSCRIPT_EMPTY: &str = "No history yet.";

/// A single completed calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Left operand exactly as it was held
    pub previous: String,
    /// Operation applied
    pub operation: Operation,
    /// Right operand as parsed, before rounding
    pub current: String,
    /// Rounded result
    pub result: String,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(
        previous: impl Into<String>,
        operation: Operation,
        current: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            previous: previous.into(),
            operation,
            current: current.into(),
            result: result.into(),
        }
    }

    /// Returns the formatted line `"<previous> <op> <current> = <result>"`
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} {} {} = {}",
            self.previous, self.operation, self.current, self.result
        )
    }
}

/// Ordered calculation history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears all history entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns an iterator over the entries (newest first)
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns the entry at the given index (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the entries as a slice (oldest first)
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns every entry as its display line (oldest first)
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(HistoryEntry::display).collect()
    }

    /// Serializes the history to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Serializes the history to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Renders the numbered transcript block written to history logs
    #[must_use]
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        out.push_str(TRANSCRIPT_HEADER);
        out.push('\n');
        if self.entries.is_empty() {
            out.push_str(TRANSCRIPT_EMPTY);
            out.push('\n');
        } else {
            for (index, entry) in self.entries.iter().enumerate() {
                out.push_str(&format!("{}: {}\n", index + 1, entry.display()));
            }
        }
        out.push_str(TRANSCRIPT_FOOTER);
        out.push('\n');
        out
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
