//! Read-only session summary for the presentation layer.

use serde::{Deserialize, Serialize};

use super::phase::{GameResult, TurnPhase};
use crate::board::Card;
use crate::core::{Mode, Side, SideMap};
use crate::difficulty::PresetId;

/// Everything a renderer needs for one frame.
///
/// Cards are row-major and include face-down symbols; hiding them is the
/// renderer's job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub preset: PresetId,
    pub mode: Mode,
    pub rows: usize,
    pub cols: usize,
    pub cards: Vec<Card>,
    pub phase: TurnPhase,
    pub active: Side,
    pub scores: SideMap<u32>,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub history_len: usize,
    pub memory_len: usize,
    pub outcome: Option<GameResult>,
    pub can_undo: bool,
    pub time_remaining_ms: u64,
}

impl SessionSnapshot {
    /// The card at `(row, col)`. `None` off the grid or past the end of
    /// `cards`.
    #[must_use]
    pub fn card_at(&self, row: usize, col: usize) -> Option<&Card> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cards.get(row * self.cols + col)
    }

    /// Share of all pairs held by `side`, in `[0, 1]`.
    #[must_use]
    pub fn score_fraction(&self, side: Side) -> f64 {
        if self.total_pairs == 0 {
            return 0.0;
        }
        f64::from(self.scores[side]) / self.total_pairs as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{Pacing, Position, SessionSettings, Symbol};
    use crate::engine::GameSession;

    fn snapshot_after_one_match() -> SessionSnapshot {
        let (a, b) = (Symbol::new(0), Symbol::new(1));
        let board = Board::from_layout(2, 2, &[a, b, b, a]).unwrap();
        let settings = SessionSettings::seeded(1).with_pacing(Pacing::instant());
        let mut session = GameSession::from_board(PresetId::Medium, Mode::TwoPlayer, settings, board);
        session.pick_card(Position::new(0, 0)).unwrap();
        session.pick_card(Position::new(1, 1)).unwrap();
        session.advance(0);
        session.snapshot()
    }

    #[test]
    fn test_card_at() {
        let snap = snapshot_after_one_match();
        assert_eq!(snap.card_at(0, 1).map(|c| c.symbol), Some(Symbol::new(1)));
        assert!(snap.card_at(1, 1).is_some_and(|c| c.matched));
        assert!(snap.card_at(2, 0).is_none());
        assert!(snap.card_at(0, 2).is_none());
    }

    #[test]
    fn test_card_at_short_card_list() {
        let mut snap = snapshot_after_one_match();
        snap.cards.truncate(1);
        assert!(snap.card_at(0, 0).is_some());
        assert!(snap.card_at(1, 1).is_none());
    }

    #[test]
    fn test_score_fraction() {
        let snap = snapshot_after_one_match();
        assert!((snap.score_fraction(Side::First) - 0.5).abs() < f64::EPSILON);
        assert_eq!(snap.score_fraction(Side::Second), 0.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = snapshot_after_one_match();
        let json = serde_json::to_string(&snap).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
        assert!(snap.can_undo);
        assert_eq!(snap.history_len, 1);
    }
}
