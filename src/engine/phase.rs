//! Turn phases and final results.

use serde::{Deserialize, Serialize};

use crate::core::{Position, Side};

/// Where the turn state machine currently stands.
///
/// Picks are accepted only in the two `Awaiting*` phases. `GameOver` and
/// `Abandoned` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the active side's first card.
    AwaitingFirstPick,

    /// One card is face up, waiting for its partner.
    AwaitingSecondPick { first: Position },

    /// Both cards are face up and will be compared when the resolution
    /// delay elapses.
    Resolving { first: Position, second: Position },

    /// Resolution is done; the turn is being handed on (after a mismatch,
    /// once both cards have been hidden again).
    SwitchingTurn,

    /// Every pair is matched.
    GameOver,

    /// The session was exited mid-play.
    Abandoned,
}

impl TurnPhase {
    /// Whether a pick may be made in this phase.
    #[must_use]
    pub const fn accepts_picks(self) -> bool {
        matches!(self, TurnPhase::AwaitingFirstPick | TurnPhase::AwaitingSecondPick { .. })
    }

    /// Whether the session has ended, by completion or by exit.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::GameOver | TurnPhase::Abandoned)
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Equal scores.
    Tie,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(first: u32, second: u32) -> Self {
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(Side::First),
            std::cmp::Ordering::Less => GameResult::Winner(Side::Second),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }
}
