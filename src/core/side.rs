//! Sides, game modes, and per-side data storage.
//!
//! ## Side
//!
//! A session always has exactly two sides. `Side::First` is the human in
//! solo play and Player 1 in two-player play; it always moves first.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human (solo play) or Player 1 (two-player play).
    First,
    /// The computer (solo play) or Player 2 (two-player play).
    Second,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    /// The side that plays after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Slot index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Who controls the second side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// One human against the recall-based computer opponent.
    #[default]
    VsComputer,
    /// Two humans sharing the board.
    TwoPlayer,
}

impl Mode {
    /// Whether `side` is driven by the engine rather than by input.
    #[must_use]
    pub const fn is_computer(self, side: Side) -> bool {
        matches!((self, side), (Mode::VsComputer, Side::Second))
    }

    /// Label shown for a side in this mode.
    #[must_use]
    pub const fn label(self, side: Side) -> &'static str {
        match (self, side) {
            (Mode::VsComputer, Side::First) => "Player",
            (Mode::VsComputer, Side::Second) => "Computer",
            (Mode::TwoPlayer, Side::First) => "Player 1",
            (Mode::TwoPlayer, Side::Second) => "Player 2",
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ```
/// use memory_match::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::default();
/// scores[Side::Second] += 1;
/// assert_eq!(scores[Side::First], 0);
/// assert_eq!(scores[Side::Second], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::First), factory(Side::Second)],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_other() {
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other(), Side::First);
        assert_eq!(format!("{}", Side::First), "first");
        assert_eq!(format!("{}", Side::Second), "second");
    }

    #[test]
    fn test_mode_computer_control() {
        assert!(!Mode::VsComputer.is_computer(Side::First));
        assert!(Mode::VsComputer.is_computer(Side::Second));
        assert!(!Mode::TwoPlayer.is_computer(Side::First));
        assert!(!Mode::TwoPlayer.is_computer(Side::Second));
        assert_eq!(Mode::VsComputer.label(Side::Second), "Computer");
        assert_eq!(Mode::TwoPlayer.label(Side::Second), "Player 2");
    }

    #[test]
    fn test_side_map_new_and_mutation() {
        let mut map: SideMap<u32> = SideMap::new(|s| s.index() as u32 * 10);
        assert_eq!(map[Side::First], 0);
        assert_eq!(map[Side::Second], 10);

        map[Side::First] = 3;
        assert_eq!(map[Side::First], 3);
    }

    #[test]
    fn test_side_map_iter() {
        let map: SideMap<u32> = SideMap::new(|s| s.index() as u32);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::First, &0), (Side::Second, &1)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map: SideMap<u32> = SideMap::new(|s| s.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
