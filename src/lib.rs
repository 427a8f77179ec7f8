//! # memory-match
//!
//! A memory-matching (concentration) card game engine with a computer
//! opponent that remembers what it has seen.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned Sessions**: A [`GameSession`] is a plain value. There is
//!    no global state; rendering reads it through queries or a
//!    [`SessionSnapshot`].
//!
//! 2. **Virtual Time**: Delayed steps (resolving a pair, hiding a mismatch,
//!    the computer's picks) are queued continuations fired by
//!    [`GameSession::advance`]. Tests and front ends drive the clock.
//!
//! 3. **Deterministic Replay**: Every shuffle and computer choice draws from
//!    one seeded [`GameRng`].
//!
//! ## Modules
//!
//! - `core`: Positions, symbols, sides, RNG, configuration, errors
//! - `board`: The card grid and its invariants
//! - `history`: Stack of resolved matches for undo
//! - `opponent`: The computer's memory and move choice
//! - `difficulty`: Named presets (board size, time limit, think delay)
//! - `engine`: Turn state machine, scheduler, session snapshot

pub mod core;
pub mod board;
pub mod history;
pub mod opponent;
pub mod difficulty;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, InvalidMoveError,
    GameRng,
    Mode, Side, SideMap,
    Pacing, SessionSettings,
    Position, Symbol, SymbolPool,
};

pub use crate::board::{Board, Card};

pub use crate::history::{CardSnapshot, MoveHistory, MoveRecord};

pub use crate::opponent::{MemoryDetail, OpponentMemory};

pub use crate::difficulty::{DifficultyCatalog, DifficultyPreset, PresetId};

pub use crate::engine::{GameResult, GameSession, SessionSnapshot, TurnPhase};
