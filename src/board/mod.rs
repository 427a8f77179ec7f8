//! The card grid.
//!
//! ## Key Types
//!
//! - `Card`: symbol plus face-up and matched flags at a fixed position
//! - `Board`: the `rows x cols` grid, pairing and shuffle logic
//!
//! Matched cards stay where they are; nothing is ever relocated after
//! the initial shuffle.

pub mod card;
pub mod grid;

pub use card::Card;
pub use grid::Board;
