//! The computer opponent.
//!
//! The opponent only knows what has been shown face up. It remembers the
//! positions of mismatched cards, forgets them once they are matched, and
//! falls back to a uniform random guess whenever recall has nothing valid
//! to offer.
//!
//! ## Key Types
//!
//! - [`OpponentMemory`]: symbol → remembered positions, plus move choice
//! - [`MemoryDetail`]: one symbol's entry, for display

mod memory;

pub use memory::{MemoryDetail, OpponentMemory};
