//! Resolved-match records.

use serde::{Deserialize, Serialize};

use crate::board::Card;
use crate::core::{Position, Side, Symbol};

/// Where a matched card sat and what it showed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub position: Position,
    pub symbol: Symbol,
}

impl From<&Card> for CardSnapshot {
    fn from(card: &Card) -> Self {
        Self {
            position: card.position,
            symbol: card.symbol,
        }
    }
}

/// A successful match, in the order the two cards were picked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// First card picked.
    pub first: CardSnapshot,

    /// Second card picked.
    pub second: CardSnapshot,

    /// Side credited with the pair.
    pub side: Side,
}

impl MoveRecord {
    /// Create a new match record.
    #[must_use]
    pub fn new(first: CardSnapshot, second: CardSnapshot, side: Side) -> Self {
        Self { first, second, side }
    }

    /// Both positions of the pair.
    #[must_use]
    pub fn positions(&self) -> [Position; 2] {
        [self.first.position, self.second.position]
    }
}
