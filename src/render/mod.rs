//! Rendering module for tetris-weather.
//!
//! Turns grids and pieces into SVG fragments, resolving block codes
//! through a palette.

mod grid;
mod piece;

pub use grid::{draw_grid, BLOCK_STROKE, CELL_FILL, CELL_OPACITY, DEFAULT_INSET};
pub use piece::{draw_piece, PIECE_STROKE};
