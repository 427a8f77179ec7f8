//! Core engine types: positions, symbols, sides, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by the board, the opponent
//! memory, and the turn engine.

pub mod config;
pub mod error;
pub mod position;
pub mod rng;
pub mod side;
pub mod symbol;

pub use config::{Pacing, SessionSettings};
pub use error::{ConfigError, InvalidMoveError};
pub use position::Position;
pub use rng::GameRng;
pub use side::{Mode, Side, SideMap};
pub use symbol::{Symbol, SymbolPool};
