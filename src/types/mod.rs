//! Core domain types for tetris-weather.
//!
//! - `Colour` - RGBA colour values
//! - `Palette` - Block codes mapped to fill colours or the empty marker
//! - `Grid` - Rectangular layouts of settled blocks
//! - `Piece` - Falling piece offsets

mod colour;
mod grid;
mod palette;
mod piece;

pub use colour::Colour;
pub use grid::Grid;
pub use palette::{Palette, Swatch, EMPTY, HIGHLIGHT};
pub use piece::Piece;
