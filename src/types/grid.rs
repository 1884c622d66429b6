//! Grid layouts of settled blocks.
//!
//! A grid is written as rows of palette codes, top row first:
//!
//! ```text
//! BBG.
//! BBOO
//! .GRO
//! ..RO
//! ```

use crate::error::{Result, WeatherError};

/// A rectangular table of palette codes (row-major: `rows[y][x]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    /// Parse a grid from its rows.
    ///
    /// Every row must have the same number of codes as the first one.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let rows: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();

        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => {
                return Err(WeatherError::Layout {
                    message: "Grid layout has no cells".to_string(),
                    help: Some("Give the layout at least one non-empty row".to_string()),
                })
            }
        };

        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(WeatherError::Layout {
                message: format!(
                    "Row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    width
                ),
                help: Some("All rows of a grid layout must be the same length".to_string()),
            });
        }

        Ok(Self { rows, width })
    }

    /// Get the width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in cells.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Iterate cells as `(x, y, code)` in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &c)| (x, y, c)))
    }

    /// Count cells holding `code`.
    pub fn count(&self, code: char) -> usize {
        self.iter_cells().filter(|&(_, _, c)| c == code).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rectangular() {
        let grid = Grid::parse(&["BBG.", "BBOO", ".GRO", "..RO"]).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.count('.'), 4);
    }

    #[test]
    fn test_iter_cells_row_major() {
        let grid = Grid::parse(&["AB", "CD"]).unwrap();
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(
            cells,
            vec![(0, 0, 'A'), (1, 0, 'B'), (0, 1, 'C'), (1, 1, 'D')]
        );
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let err = Grid::parse(&["BBB", "BB"]).unwrap_err();
        match err {
            WeatherError::Layout { message, .. } => {
                assert_eq!(message, "Row 1 has 2 cells, expected 3")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_long_row() {
        assert!(Grid::parse(&["BB", "BBB"]).is_err());
    }

    #[test]
    fn test_parse_rejects_empty() {
        let rows: [&str; 0] = [];
        assert!(Grid::parse(&rows).is_err());
        assert!(Grid::parse(&[""]).is_err());
    }

    #[test]
    fn test_codes_count_by_char_not_byte() {
        let grid = Grid::parse(&["é.", "Bé"]).unwrap();
        assert_eq!(grid.width(), 2);
    }
}
