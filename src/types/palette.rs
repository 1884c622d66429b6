//! Palette of single-character block codes.
//!
//! Every grid layout is written in palette codes. Each code resolves to a
//! [`Swatch`]: either a fill colour or the empty marker, which leaves the
//! cell without a foreground block.
//!
//! Lookup is lenient. A code that is not in the palette resolves to the
//! palette's fallback colour instead of failing, so a typo in a layout
//! shows up as a mild-green block rather than an error.

use std::collections::HashMap;

use crate::error::{Result, WeatherError};

use super::Colour;

/// The code used for empty cells in the builtin layouts.
pub const EMPTY: char = '.';

/// The code whose colour is used for falling pieces.
pub const HIGHLIGHT: char = 'H';

/// What a palette code resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    /// Draw a block filled with this colour.
    Fill(Colour),
    /// Leave the cell without a foreground block.
    Empty,
}

/// An immutable mapping from block codes to swatches.
#[derive(Debug, Clone)]
pub struct Palette {
    swatches: HashMap<char, Swatch>,
    fallback: Colour,
}

impl Palette {
    /// Create a palette with no codes and the given fallback colour.
    pub fn new(fallback: Colour) -> Self {
        Self {
            swatches: HashMap::new(),
            fallback,
        }
    }

    /// The builtin weather palette.
    pub fn weather() -> Self {
        let mild = Colour::hex(0x7CF2C7);
        let mut palette = Self::new(mild);
        palette.insert('B', Swatch::Fill(Colour::hex(0x4CC3FF))); // cold blue
        palette.insert('C', Swatch::Fill(Colour::hex(0x73E8FF))); // ice cyan
        palette.insert('G', Swatch::Fill(mild));
        palette.insert('O', Swatch::Fill(Colour::hex(0xF7C266))); // warm
        palette.insert('R', Swatch::Fill(Colour::hex(0xFF6B6B))); // hot, stormy
        palette.insert('M', Swatch::Fill(Colour::hex(0x9C6BFF))); // unstable
        palette.insert(HIGHLIGHT, Swatch::Fill(Colour::hex(0x8BF4FF)));
        palette.insert(EMPTY, Swatch::Empty);
        palette
    }

    /// Resolve a code, falling back to the fallback colour when unmapped.
    pub fn lookup(&self, code: char) -> Swatch {
        self.swatches
            .get(&code)
            .copied()
            .unwrap_or(Swatch::Fill(self.fallback))
    }

    /// The fill colour for falling pieces.
    pub fn highlight(&self) -> Colour {
        match self.lookup(HIGHLIGHT) {
            Swatch::Fill(colour) => colour,
            Swatch::Empty => self.fallback,
        }
    }

    /// The colour used for unmapped codes.
    pub fn fallback(&self) -> Colour {
        self.fallback
    }

    /// Return a copy with `code` remapped from a config value.
    ///
    /// `value` is a hex colour or `none` for the empty marker.
    pub fn with_override(mut self, code: &str, value: &str) -> Result<Self> {
        let mut chars = code.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(WeatherError::Config {
                    message: format!("Palette code '{}' must be a single character", code),
                    help: Some("Use keys like B, O or '.'".to_string()),
                })
            }
        };

        let swatch = if value.trim().eq_ignore_ascii_case("none") {
            Swatch::Empty
        } else {
            Swatch::Fill(Colour::from_hex(value)?)
        };

        self.insert(code, swatch);
        Ok(self)
    }

    fn insert(&mut self, code: char, swatch: Swatch) {
        self.swatches.insert(code, swatch);
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::weather()
    }
}
