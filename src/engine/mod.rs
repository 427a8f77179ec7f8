//! Turn engine.
//!
//! [`GameSession`] runs the state machine:
//!
//! ```text
//! AwaitingFirstPick --pick--> AwaitingSecondPick --pick--> Resolving
//!        ^                                                     |
//!        |                                   match / mismatch (after delay)
//!        |                                                     v
//!        +---------------- SwitchingTurn <---------------------+
//!                                                              |
//!                                             board complete --+--> GameOver
//! ```
//!
//! `abandon` moves any phase to `Abandoned`. A match keeps the turn; a
//! mismatch hands it over once the pair has been hidden again.
//!
//! ## Deferred steps
//!
//! Delays are [`Continuation`]s queued on a virtual clock and tagged with
//! the session generation. Reset and abandon bump the generation, so
//! anything queued earlier fires as a no-op.

mod phase;
mod schedule;
mod session;
mod view;

pub use phase::{GameResult, TurnPhase};
pub use schedule::{Continuation, Generation, ScheduledTask, Scheduler};
pub use session::GameSession;
pub use view::SessionSnapshot;
