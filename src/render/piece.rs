//! Piece renderer - the falling blocks drawn over a grid.

use crate::svg::{rect, Fragment};
use crate::types::{Colour, Palette, Piece};

/// Outline of falling blocks.
pub const PIECE_STROKE: Colour = Colour::hex(0x9CF6FF);

const PIECE_INSET: f64 = 6.0;
const PIECE_RADIUS: f64 = 14.0;
const PIECE_STROKE_WIDTH: f64 = 2.0;

/// Render one highlighted block per piece offset.
///
/// Offsets are relative to the same `origin` and `cell` as the grid they
/// fall over; they are not clipped to it. Positions are computed in `f64`,
/// so no offset can overflow.
pub fn draw_piece(piece: &Piece, palette: &Palette, origin: (i32, i32), cell: i32) -> Vec<Fragment> {
    let (ox, oy) = (f64::from(origin.0), f64::from(origin.1));
    let cell = f64::from(cell);
    let size = cell - PIECE_INSET * 2.0;
    let fill = palette.highlight();

    piece
        .cells()
        .iter()
        .map(|&(x, y)| {
            let cx = ox + f64::from(x) * cell + PIECE_INSET;
            let cy = oy + f64::from(y) * cell + PIECE_INSET;
            rect(cx, cy, size, size, fill)
                .rounded(PIECE_RADIUS)
                .stroke(PIECE_STROKE, PIECE_STROKE_WIDTH)
                .to_fragment()
        })
        .collect()
}
