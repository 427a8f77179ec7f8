//! Error types for session setup and gameplay.
//!
//! - [`ConfigError`]: the session cannot be built (fatal at start).
//! - [`InvalidMoveError`]: an action was rejected; nothing was mutated.

use thiserror::Error;

use super::position::Position;
use super::side::Side;
use super::symbol::Symbol;

/// A preset, board size, symbol pool, or pacing table is unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The board has no cells.
    #[error("Board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },

    /// Cards cannot be paired on an odd-sized board.
    #[error("Board {rows}x{cols} has an odd number of cards")]
    OddCardCount { rows: usize, cols: usize },

    /// Not enough distinct symbols for the requested pairs.
    #[error("Symbol pool too small: need {needed} distinct symbols, have {available}")]
    SymbolPoolTooSmall { needed: usize, available: usize },

    /// An explicit layout does not fill the grid.
    #[error("Layout has {actual} cards, board needs {expected}")]
    LayoutSize { expected: usize, actual: usize },

    /// An explicit layout holds a symbol other than exactly twice.
    #[error("Symbol {0} does not appear exactly twice in the layout")]
    UnpairedSymbol(Symbol),

    /// A preset name did not match any known difficulty.
    #[error("Unknown difficulty preset: {0}")]
    UnknownPreset(String),

    /// Pacing configuration could not be parsed.
    #[error("Invalid pacing configuration: {0}")]
    Pacing(String),
}

/// A pick or undo that the engine refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveError {
    /// The session is over or was abandoned.
    #[error("Session is not active")]
    SessionInactive,

    /// A resolution or turn hand-off is in progress.
    #[error("Engine is busy resolving the current turn")]
    Busy,

    /// The caller is not the side to move.
    #[error("Not your turn: {active} side is to move")]
    NotYourTurn { active: Side },

    /// The position is outside the grid.
    #[error("Position {0} is off the board")]
    OutOfBounds(Position),

    /// The card is already face up.
    #[error("Card at {0} is already revealed")]
    AlreadyRevealed(Position),

    /// The card has already been paired.
    #[error("Card at {0} is already matched")]
    AlreadyMatched(Position),

    /// Move history is empty.
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The latest match belongs to a side that may not undo it.
    #[error("Latest match belongs to the {owner} side and cannot be undone")]
    UndoNotAllowed { owner: Side },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::SymbolPoolTooSmall { needed: 8, available: 4 };
        assert_eq!(
            err.to_string(),
            "Symbol pool too small: need 8 distinct symbols, have 4"
        );

        let err = InvalidMoveError::AlreadyMatched(Position::new(1, 2));
        assert_eq!(err.to_string(), "Card at (1,2) is already matched");

        let err = InvalidMoveError::NotYourTurn { active: Side::Second };
        assert_eq!(err.to_string(), "Not your turn: second side is to move");

        let err = InvalidMoveError::UndoNotAllowed { owner: Side::Second };
        assert_eq!(
            err.to_string(),
            "Latest match belongs to the second side and cannot be undone"
        );
    }
}
