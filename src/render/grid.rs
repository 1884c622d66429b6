//! Grid renderer - settled blocks over a faint cell background.

use crate::svg::{rect, Fragment};
use crate::types::{Colour, Grid, Palette, Swatch};

/// Background cell fill.
pub const CELL_FILL: Colour = Colour::hex(0x121C33);
/// Background cell opacity.
pub const CELL_OPACITY: f64 = 0.35;
/// Outline of settled blocks.
pub const BLOCK_STROKE: Colour = Colour::hex(0x0C182C);

/// Inset of settled blocks from their cell edges.
pub const DEFAULT_INSET: i32 = 8;

const CELL_RADIUS: f64 = 10.0;
const BLOCK_RADIUS: f64 = 12.0;
const BLOCK_STROKE_WIDTH: f64 = 1.2;

/// Render a grid with its top-left cell at `origin`.
///
/// Cells are emitted row-major. Each cell gets a background square, then a
/// block inset by `inset` on every side unless its code resolves to
/// [`Swatch::Empty`]. Positions are computed in `f64`, so an extreme origin
/// cannot overflow.
pub fn draw_grid(
    grid: &Grid,
    palette: &Palette,
    origin: (i32, i32),
    cell: i32,
    inset: i32,
) -> Vec<Fragment> {
    let (ox, oy) = (f64::from(origin.0), f64::from(origin.1));
    let cell = f64::from(cell);
    let inset = f64::from(inset);
    let block = cell - inset * 2.0;

    let mut fragments: Vec<Fragment> = Vec::with_capacity(grid.width() * grid.height() * 2);

    for (x, y, code) in grid.iter_cells() {
        let cx = ox + x as f64 * cell;
        let cy = oy + y as f64 * cell;

        fragments.push(
            rect(cx, cy, cell, cell, CELL_FILL)
                .rounded(CELL_RADIUS)
                .opacity(CELL_OPACITY)
                .to_fragment(),
        );

        let colour = match palette.lookup(code) {
            Swatch::Fill(colour) => colour,
            Swatch::Empty => continue,
        };

        fragments.push(
            rect(cx + inset, cy + inset, block, block, colour)
                .rounded(BLOCK_RADIUS)
                .stroke(BLOCK_STROKE, BLOCK_STROKE_WIDTH)
                .to_fragment(),
        );
    }

    fragments
}
