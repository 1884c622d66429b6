//! Falling pieces.

/// A falling piece: cell offsets `(col, row)` relative to a grid origin.
///
/// Offsets are not checked against any grid. Negative or out-of-range
/// offsets are legal, and duplicates draw overlapping blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Piece {
    cells: Vec<(i32, i32)>,
}

impl Piece {
    /// Create a piece from its cell offsets.
    pub fn new(cells: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// The cell offsets in drawing order.
    pub fn cells(&self) -> &[(i32, i32)] {
        &self.cells
    }
}
