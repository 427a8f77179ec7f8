//! Session configuration.
//!
//! - `Pacing`: delays for the engine's deferred steps, loadable from TOML
//! - `SessionSettings`: pacing plus an optional fixed seed
//!
//! Board size and think delay come from the difficulty preset; everything
//! here is independent of difficulty.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Delays (virtual milliseconds) between the steps of a turn.
///
/// ```
/// use memory_match::core::Pacing;
///
/// let pacing = Pacing::from_toml("mismatch_hide_ms = 250").unwrap();
/// assert_eq!(pacing.mismatch_hide_ms, 250);
/// assert_eq!(pacing.resolve_delay_ms, 1000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Time both picked cards stay face up before they are compared.
    #[serde(default = "default_resolve_delay")]
    pub resolve_delay_ms: u64,

    /// Time a mismatched pair stays face up before it is hidden and the
    /// turn passes.
    #[serde(default = "default_mismatch_hide")]
    pub mismatch_hide_ms: u64,

    /// Time between the computer's first and second pick.
    #[serde(default = "default_pick_gap")]
    pub computer_pick_gap_ms: u64,
}

fn default_resolve_delay() -> u64 {
    1000
}

fn default_mismatch_hide() -> u64 {
    500
}

fn default_pick_gap() -> u64 {
    1000
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            resolve_delay_ms: default_resolve_delay(),
            mismatch_hide_ms: default_mismatch_hide(),
            computer_pick_gap_ms: default_pick_gap(),
        }
    }
}

impl Pacing {
    /// All delays zero. Continuations still queue, but fire on the next
    /// `advance(0)`.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            resolve_delay_ms: 0,
            mismatch_hide_ms: 0,
            computer_pick_gap_ms: 0,
        }
    }

    /// Parse pacing from a TOML table. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Pacing` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Pacing(e.to_string()))
    }
}

/// Everything a session needs besides its preset and mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Fixed RNG seed; `None` draws one from entropy for each board.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Step delays.
    #[serde(default)]
    pub pacing: Pacing,
}

impl SessionSettings {
    /// Settings with a fixed seed and default pacing.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            pacing: Pacing::default(),
        }
    }

    /// Replace the pacing.
    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }
}
