//! The preset table and neighbour lookup.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::ConfigError;

/// Identifier for one of the fixed presets, easiest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetId {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl PresetId {
    /// All presets, easiest first.
    pub const ALL: [PresetId; 3] = [PresetId::Easy, PresetId::Medium, PresetId::Hard];

    /// Lowercase name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PresetId::Easy => "easy",
            PresetId::Medium => "medium",
            PresetId::Hard => "hard",
        }
    }

    const fn rank(self) -> usize {
        match self {
            PresetId::Easy => 0,
            PresetId::Medium => 1,
            PresetId::Hard => 2,
        }
    }
}

impl FromStr for PresetId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

impl std::fmt::Display for PresetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board size and pacing for one difficulty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyPreset {
    pub id: PresetId,

    /// Display name.
    pub name: String,

    pub rows: usize,
    pub cols: usize,

    /// Round time limit shown to the player.
    pub time_limit_secs: u64,

    /// Delay before the computer starts its turn.
    pub think_delay_ms: u64,
}

impl DifficultyPreset {
    fn new(id: PresetId, name: &str, rows: usize, cols: usize, time_limit_secs: u64, think_delay_ms: u64) -> Self {
        Self {
            id,
            name: name.to_string(),
            rows,
            cols,
            time_limit_secs,
            think_delay_ms,
        }
    }

    /// Cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.card_count() / 2
    }
}

/// The closed set of presets, easiest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyCatalog {
    presets: Vec<DifficultyPreset>,
}

impl DifficultyCatalog {
    /// Easy 3x4, Medium 4x4, Hard 4x6.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            presets: vec![
                DifficultyPreset::new(PresetId::Easy, "Easy", 3, 4, 180, 1500),
                DifficultyPreset::new(PresetId::Medium, "Medium", 4, 4, 120, 1000),
                DifficultyPreset::new(PresetId::Hard, "Hard", 4, 6, 90, 800),
            ],
        }
    }

    /// The preset for `id`.
    #[must_use]
    pub fn get(&self, id: PresetId) -> &DifficultyPreset {
        &self.presets[id.rank()]
    }

    /// The preset offered first (Medium).
    #[must_use]
    pub fn default_preset(&self) -> &DifficultyPreset {
        self.get(PresetId::default())
    }

    /// The next easier preset, if any.
    #[must_use]
    pub fn easier(&self, id: PresetId) -> Option<&DifficultyPreset> {
        id.rank().checked_sub(1).and_then(|i| self.presets.get(i))
    }

    /// The next harder preset, if any.
    #[must_use]
    pub fn harder(&self, id: PresetId) -> Option<&DifficultyPreset> {
        self.presets.get(id.rank() + 1)
    }

    /// All presets, easiest first.
    pub fn iter(&self) -> impl Iterator<Item = &DifficultyPreset> {
        self.presets.iter()
    }
}

impl Default for DifficultyCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
