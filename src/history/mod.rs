//! Move history for undo.
//!
//! Successful matches are pushed onto a LIFO stack. Undo only ever looks
//! at the top entry; there is no random access.
//!
//! ## Example Usage
//!
//! ```
//! use memory_match::core::{Position, Side, Symbol};
//! use memory_match::history::{CardSnapshot, MoveHistory, MoveRecord};
//!
//! let snap = |row, col| CardSnapshot { position: Position::new(row, col), symbol: Symbol::new(0) };
//!
//! let mut history = MoveHistory::new();
//! history.push_match(MoveRecord::new(snap(0, 0), snap(0, 1), Side::First));
//! assert_eq!(history.len(), 1);
//!
//! // An empty history is a normal state, not an error.
//! assert!(history.pop_last().is_some());
//! assert!(history.pop_last().is_none());
//! ```

mod record;

pub use record::{CardSnapshot, MoveRecord};

use serde::{Deserialize, Serialize};

/// LIFO stack of resolved matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    /// Index 0 = oldest, last = most recent.
    entries: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful match.
    pub fn push_match(&mut self, record: MoveRecord) {
        self.entries.push(record);
    }

    /// Remove and return the most recent match, or `None` if there is
    /// nothing to undo.
    pub fn pop_last(&mut self) -> Option<MoveRecord> {
        self.entries.pop()
    }

    /// The most recent match without removing it.
    #[must_use]
    pub fn peek_last(&self) -> Option<&MoveRecord> {
        self.entries.last()
    }

    /// Whether no matches are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
