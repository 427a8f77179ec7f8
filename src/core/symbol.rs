//! Card faces and the fixed symbol pool.

use serde::{Deserialize, Serialize};

/// The standard face set, in the order pairs are drawn from it.
const STANDARD_GLYPHS: [&str; 16] = [
    "🍎", "🍌", "🍇", "🍊", "🍓", "🍒", "🍑", "🍍", "🥝", "🍉", "🍋", "🥥", "🍆", "🥕", "🌽", "🥑",
];

/// Face value printed on a card. Two cards share each symbol on a board.
///
/// The symbol is an index into its [`SymbolPool`]; [`Symbol::glyph`] resolves
/// it against the standard pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u8);

impl Symbol {
    /// Create a symbol from its pool index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Pool index of this symbol.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Printable face from the standard pool, or `"?"` past its end.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        STANDARD_GLYPHS.get(self.index()).copied().unwrap_or("?")
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A set of distinct symbols a board can draw its pairs from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolPool {
    symbols: Vec<Symbol>,
}

impl SymbolPool {
    /// The fixed 16-symbol pool every session uses.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_size(STANDARD_GLYPHS.len())
    }

    /// The first `size` symbols of the standard ordering.
    ///
    /// Sizes past the standard pool clamp to it.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        let size = size.min(STANDARD_GLYPHS.len());
        Self {
            symbols: (0..size as u8).map(Symbol).collect(),
        }
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the pool has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in draw order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl Default for SymbolPool {
    fn default() -> Self {
        Self::standard()
    }
}
