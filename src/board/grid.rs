//! Board construction and card state transitions.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{ConfigError, GameRng, InvalidMoveError, Position, Symbol, SymbolPool};

/// A `rows x cols` grid holding exactly two cards per symbol.
///
/// Cards are stored row-major. Positions are fixed once the board is built.
///
/// ```
/// use memory_match::board::Board;
/// use memory_match::core::{GameRng, Position, SymbolPool};
///
/// let mut rng = GameRng::new(42);
/// let mut board = Board::initialize(2, 2, &SymbolPool::standard(), &mut rng).unwrap();
/// assert_eq!(board.total_pairs(), 2);
///
/// board.reveal(Position::new(0, 0)).unwrap();
/// assert!(board.reveal(Position::new(0, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cards: Vec<Card>,
}

impl Board {
    /// Build a shuffled board of `rows * cols / 2` pairs.
    ///
    /// Pairs are drawn from the first symbols of `pool`, shuffled with
    /// Fisher–Yates, and laid out row-major.
    ///
    /// # Errors
    /// Returns `ConfigError` if the board is empty, has an odd card count,
    /// or `pool` has fewer distinct symbols than pairs.
    pub fn initialize(
        rows: usize,
        cols: usize,
        pool: &SymbolPool,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        let pairs = Self::pair_count(rows, cols)?;
        if pool.len() < pairs {
            return Err(ConfigError::SymbolPoolTooSmall {
                needed: pairs,
                available: pool.len(),
            });
        }

        let mut faces: Vec<Symbol> = pool.symbols()[..pairs]
            .iter()
            .flat_map(|&symbol| [symbol, symbol])
            .collect();
        rng.shuffle(&mut faces);

        Ok(Self::lay_out(rows, cols, faces))
    }

    /// Build an unshuffled board from an explicit row-major layout.
    ///
    /// Used to set up known positions. Every symbol must appear exactly twice.
    ///
    /// # Errors
    /// Returns `ConfigError` on a bad size or a symbol not appearing exactly
    /// twice.
    pub fn from_layout(rows: usize, cols: usize, faces: &[Symbol]) -> Result<Self, ConfigError> {
        Self::pair_count(rows, cols)?;
        if faces.len() != rows * cols {
            return Err(ConfigError::LayoutSize {
                expected: rows * cols,
                actual: faces.len(),
            });
        }

        let mut sorted = faces.to_vec();
        sorted.sort_unstable();
        for chunk in sorted.chunks(2) {
            if chunk[0] != chunk[1] || sorted.iter().filter(|&&s| s == chunk[0]).count() != 2 {
                return Err(ConfigError::UnpairedSymbol(chunk[0]));
            }
        }

        Ok(Self::lay_out(rows, cols, faces.to_vec()))
    }

    fn pair_count(rows: usize, cols: usize) -> Result<usize, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyBoard { rows, cols });
        }
        if (rows * cols) % 2 != 0 {
            return Err(ConfigError::OddCardCount { rows, cols });
        }
        Ok(rows * cols / 2)
    }

    fn lay_out(rows: usize, cols: usize, faces: Vec<Symbol>) -> Self {
        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(symbol, Position::new(i / cols, i % cols)))
            .collect();
        Self { rows, cols, cards }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Pairs on the board (`rows * cols / 2`).
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Pairs currently matched.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count() / 2
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// Whether `pos` lies on the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// The card at `pos`, if on the grid.
    #[must_use]
    pub fn card(&self, pos: Position) -> Option<&Card> {
        self.index(pos).map(|i| &self.cards[i])
    }

    fn card_mut(&mut self, pos: Position) -> Result<&mut Card, InvalidMoveError> {
        match self.index(pos) {
            Some(i) => Ok(&mut self.cards[i]),
            None => Err(InvalidMoveError::OutOfBounds(pos)),
        }
    }

    /// All cards, row-major.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Turn a card face up.
    ///
    /// # Errors
    /// Fails if the card is off the board, already revealed, or matched.
    pub fn reveal(&mut self, pos: Position) -> Result<(), InvalidMoveError> {
        let card = self.card_mut(pos)?;
        if card.matched {
            return Err(InvalidMoveError::AlreadyMatched(pos));
        }
        if card.revealed {
            return Err(InvalidMoveError::AlreadyRevealed(pos));
        }
        card.revealed = true;
        Ok(())
    }

    /// Turn a card face down. No-op if hidden, matched, or off the board.
    pub fn hide(&mut self, pos: Position) {
        if let Ok(card) = self.card_mut(pos) {
            if !card.matched {
                card.revealed = false;
            }
        }
    }

    /// Mark a card as paired.
    ///
    /// # Errors
    /// Fails if the card is off the board.
    pub fn set_matched(&mut self, pos: Position) -> Result<(), InvalidMoveError> {
        self.card_mut(pos)?.matched = true;
        Ok(())
    }

    /// Return a paired card to play, face down. Used by undo.
    ///
    /// # Errors
    /// Fails if the card is off the board.
    pub fn clear_matched(&mut self, pos: Position) -> Result<(), InvalidMoveError> {
        let card = self.card_mut(pos)?;
        card.matched = false;
        card.revealed = false;
        Ok(())
    }

    /// True once every card is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    /// Positions neither matched nor face up, row-major.
    ///
    /// This is the computer's pool for random guesses.
    #[must_use]
    pub fn available_unknown_positions(&self) -> Vec<Position> {
        self.cards
            .iter()
            .filter(|c| c.is_available())
            .map(|c| c.position)
            .collect()
    }
}
