//! Difficulty presets.
//!
//! Three fixed configurations ordered from easiest to hardest. Neighbours
//! are found by index, so "easier" and "harder" are plain lookups rather
//! than linked nodes.
//!
//! ```
//! use memory_match::difficulty::{DifficultyCatalog, PresetId};
//!
//! let catalog = DifficultyCatalog::standard();
//! let medium = catalog.default_preset();
//! assert_eq!(medium.id, PresetId::Medium);
//! assert_eq!(catalog.easier(medium.id).map(|p| p.id), Some(PresetId::Easy));
//! assert_eq!(catalog.harder(PresetId::Hard), None);
//! ```

mod catalog;

pub use catalog::{DifficultyCatalog, DifficultyPreset, PresetId};
