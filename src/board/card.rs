//! A single card on the board.

use serde::{Deserialize, Serialize};

use crate::core::{Position, Symbol};

/// A card at a fixed grid position.
///
/// `revealed` is the face-up flag for the current turn; `matched` is set
/// once the card has been paired and is only cleared by undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub symbol: Symbol,
    pub position: Position,
    pub revealed: bool,
    pub matched: bool,
}

impl Card {
    /// A face-down, unmatched card.
    #[must_use]
    pub const fn new(symbol: Symbol, position: Position) -> Self {
        Self {
            symbol,
            position,
            revealed: false,
            matched: false,
        }
    }

    /// Face down and still in play.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        !self.revealed && !self.matched
    }
}
