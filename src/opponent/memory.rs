//! Recall store and move selection.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::board::Board;
use crate::core::{GameRng, Position, Symbol};

/// One symbol's remembered positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDetail {
    pub symbol: Symbol,
    pub positions: Vec<Position>,
}

/// What the computer has seen: each symbol mapped to face-down positions
/// it was shown at.
///
/// Never holds a matched position as long as every match is followed by
/// [`forget`](Self::forget) on both cards.
///
/// ```
/// use memory_match::core::{Position, Symbol};
/// use memory_match::opponent::OpponentMemory;
///
/// let mut memory = OpponentMemory::new();
/// memory.remember(Symbol::new(2), Position::new(0, 1));
/// memory.remember(Symbol::new(2), Position::new(0, 1));
/// assert_eq!(memory.len(), 1);
///
/// memory.forget(Symbol::new(2), Position::new(0, 1));
/// assert!(memory.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct OpponentMemory {
    /// Positions per symbol, in the order they were first seen.
    entries: FxHashMap<Symbol, SmallVec<[Position; 2]>>,
}

impl OpponentMemory {
    /// Create an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `symbol` was seen at `pos`. Already-known positions are
    /// left as they are.
    pub fn remember(&mut self, symbol: Symbol, pos: Position) {
        let positions = self.entries.entry(symbol).or_default();
        if positions.contains(&pos) {
            return;
        }
        positions.push(pos);
        trace!(%symbol, %pos, "opponent remembers card");
    }

    /// Drop `pos` from `symbol`'s entry, removing the symbol once it has no
    /// positions left.
    pub fn forget(&mut self, symbol: Symbol, pos: Position) {
        let Some(positions) = self.entries.get_mut(&symbol) else {
            return;
        };
        positions.retain(|p| *p != pos);
        if positions.is_empty() {
            self.entries.remove(&symbol);
            trace!(%symbol, "opponent forgets symbol");
        } else {
            trace!(%symbol, %pos, "opponent forgets position");
        }
    }

    /// Pick the next card to turn.
    ///
    /// With an `anchor` (the card already turned this turn), returns the
    /// first remembered position of the anchor's symbol that is a different
    /// card and still face down and unmatched. Otherwise, or when recall has
    /// nothing valid, guesses uniformly among
    /// [`Board::available_unknown_positions`].
    ///
    /// Returns `None` only when no card is available.
    pub fn choose_move(
        &self,
        board: &Board,
        anchor: Option<Position>,
        rng: &mut GameRng,
    ) -> Option<Position> {
        if let Some(pos) = anchor.and_then(|a| self.recall_partner(board, a)) {
            debug!(%pos, "opponent recalls partner");
            return Some(pos);
        }

        let available = board.available_unknown_positions();
        let guess = rng.choose(&available).copied();
        if let Some(pos) = guess {
            debug!(%pos, candidates = available.len(), "opponent guesses");
        }
        guess
    }

    fn recall_partner(&self, board: &Board, anchor: Position) -> Option<Position> {
        let symbol = board.card(anchor)?.symbol;
        let Some(positions) = self.entries.get(&symbol) else {
            trace!(%symbol, "no memory of anchor symbol");
            return None;
        };
        positions.iter().copied().find(|&pos| {
            pos != anchor && board.card(pos).is_some_and(|card| card.is_available())
        })
    }

    /// Whether `pos` is remembered under any symbol.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.entries.values().any(|positions| positions.contains(&pos))
    }

    /// Total remembered positions across all symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(SmallVec::len).sum()
    }

    /// Whether nothing is remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remembered entries, ordered by symbol.
    #[must_use]
    pub fn details(&self) -> Vec<MemoryDetail> {
        let mut details: Vec<_> = self
            .entries
            .iter()
            .map(|(&symbol, positions)| MemoryDetail {
                symbol,
                positions: positions.to_vec(),
            })
            .collect();
        details.sort_by_key(|d| d.symbol);
        details
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(i: u8) -> Symbol {
        Symbol::new(i)
    }

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    /// A B C
    /// C B A
    fn board() -> Board {
        Board::from_layout(2, 3, &[sym(0), sym(1), sym(2), sym(2), sym(1), sym(0)]).unwrap()
    }

    #[test]
    fn test_remember_is_idempotent() {
        let mut memory = OpponentMemory::new();
        memory.remember(sym(0), pos(0, 0));
        memory.remember(sym(0), pos(0, 0));
        memory.remember(sym(0), pos(1, 2));

        assert_eq!(memory.len(), 2);
        assert_eq!(
            memory.details(),
            vec![MemoryDetail {
                symbol: sym(0),
                positions: vec![pos(0, 0), pos(1, 2)],
            }]
        );
    }

    #[test]
    fn test_forget_drops_empty_symbol() {
        let mut memory = OpponentMemory::new();
        memory.remember(sym(0), pos(0, 0));
        memory.remember(sym(0), pos(1, 2));

        memory.forget(sym(0), pos(0, 0));
        assert_eq!(memory.len(), 1);
        assert!(!memory.contains(pos(0, 0)));
        assert!(memory.contains(pos(1, 2)));

        memory.forget(sym(0), pos(1, 2));
        assert!(memory.is_empty());
        assert!(memory.details().is_empty());

        // Unknown symbol is a no-op.
        memory.forget(sym(5), pos(0, 0));
        assert!(memory.is_empty());
    }

    #[test]
    fn test_choose_move_recalls_partner() {
        let board = board();
        let mut memory = OpponentMemory::new();
        memory.remember(sym(1), pos(0, 1));
        memory.remember(sym(1), pos(1, 1));

        let mut rng = GameRng::new(3);
        assert_eq!(memory.choose_move(&board, Some(pos(0, 1)), &mut rng), Some(pos(1, 1)));
        assert_eq!(memory.choose_move(&board, Some(pos(1, 1)), &mut rng), Some(pos(0, 1)));
    }

    #[test]
    fn test_choose_move_skips_stale_entries() {
        let mut board = board();
        let mut memory = OpponentMemory::new();
        memory.remember(sym(2), pos(0, 2));

        // Partner position face up already: recall must not offer it.
        board.reveal(pos(0, 2)).unwrap();
        board.reveal(pos(1, 0)).unwrap();

        let mut rng = GameRng::new(11);
        for _ in 0..20 {
            let choice = memory.choose_move(&board, Some(pos(1, 0)), &mut rng).unwrap();
            assert!(board.card(choice).unwrap().is_available());
        }
    }

    #[test]
    fn test_choose_move_random_fallback_stays_available() {
        let mut board = board();
        board.set_matched(pos(0, 0)).unwrap();
        board.set_matched(pos(1, 2)).unwrap();
        board.reveal(pos(0, 1)).unwrap();

        let memory = OpponentMemory::new();
        let available = board.available_unknown_positions();
        let mut rng = GameRng::new(99);

        for _ in 0..50 {
            let choice = memory.choose_move(&board, None, &mut rng).unwrap();
            assert!(available.contains(&choice));
        }
    }

    #[test]
    fn test_choose_move_none_when_board_exhausted() {
        let mut board = board();
        for card in board.clone().cards() {
            board.set_matched(card.position).unwrap();
        }
        let memory = OpponentMemory::new();
        assert_eq!(memory.choose_move(&board, None, &mut GameRng::new(1)), None);
    }

    #[test]
    fn test_clear() {
        let mut memory = OpponentMemory::new();
        memory.remember(sym(0), pos(0, 0));
        memory.remember(sym(1), pos(0, 1));
        memory.clear();
        assert!(memory.is_empty());
        assert_eq!(memory.len(), 0);
    }
}
