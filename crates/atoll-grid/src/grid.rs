//! The validated rectangular grid.

use atoll_core::{Cell, Coord};

use crate::error::GridError;

/// A validated, immutable rectangular grid of water and land cells.
///
/// Constructed via [`Grid::from_rows`], which runs the full validation
/// sequence. A `Grid` that exists is always non-empty, rectangular, and
/// contains only well-formed cell values, so traversal code can index
/// freely without re-checking shape or values.
///
/// Cells are stored row-major in a single flat buffer.
///
/// # Examples
///
/// ```
/// use atoll_grid::Grid;
/// use atoll_core::Coord;
///
/// let grid = Grid::from_rows(&[vec![1, 1, 0], vec![0, 1, 0]]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert!(grid.is_land(Coord::new(0, 0)));
/// assert!(!grid.is_land(Coord::new(0, 2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Validate raw rows and build a grid.
    ///
    /// Checks run in this exact order; the first failing check determines
    /// the error and later checks are not reached:
    ///
    /// 1. at least one row — else [`GridError::NoRows`];
    /// 2. no row is empty — else [`GridError::EmptyRow`];
    /// 3. all rows share row 0's length — else [`GridError::NotRectangular`];
    /// 4. every cell is raw 0 or 1 — else [`GridError::InvalidCellValue`],
    ///    reported for the first offending cell in row-major order.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, as above.
    pub fn from_rows(raw: &[Vec<u8>]) -> Result<Self, GridError> {
        if raw.is_empty() {
            return Err(GridError::NoRows);
        }
        if let Some(row) = raw.iter().position(Vec::is_empty) {
            return Err(GridError::EmptyRow { row });
        }
        let cols = raw[0].len();
        for (row, r) in raw.iter().enumerate() {
            if r.len() != cols {
                return Err(GridError::NotRectangular {
                    row,
                    expected: cols,
                    found: r.len(),
                });
            }
        }

        let mut cells = Vec::with_capacity(raw.len() * cols);
        for (row, r) in raw.iter().enumerate() {
            for (col, &value) in r.iter().enumerate() {
                match Cell::from_raw(value) {
                    Some(cell) => cells.push(cell),
                    None => return Err(GridError::InvalidCellValue { row, col, value }),
                }
            }
        }

        Ok(Self {
            cells,
            rows: raw.len(),
            cols,
        })
    }

    /// Number of rows. Always at least 1.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns. Always at least 1.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    /// Whether the cell at `coord` is land.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    pub fn is_land(&self, coord: Coord) -> bool {
        self.cell(coord).is_land()
    }

    /// Row-major canonical ordering: `(0,0), (0,1), …, (rows-1, cols-1)`.
    ///
    /// This is the order in which the outer sweep seeds visitations.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord { row, col }))
    }

    fn index(&self, coord: Coord) -> usize {
        debug_assert!(coord.row < self.rows && coord.col < self.cols);
        coord.row * self.cols + coord.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atoll_test_utils::fixtures;
    use proptest::prelude::*;

    // ── Validation order ────────────────────────────────────────

    #[test]
    fn rejects_zero_rows() {
        assert_eq!(Grid::from_rows(&[]), Err(GridError::NoRows));
    }

    #[test]
    fn rejects_empty_row_with_its_index() {
        let raw = vec![vec![1, 0], vec![], vec![0, 1]];
        assert_eq!(Grid::from_rows(&raw), Err(GridError::EmptyRow { row: 1 }));
    }

    #[test]
    fn empty_row_wins_over_raggedness() {
        // Row 1 is both empty and a length mismatch; emptiness is
        // checked for every row before rectangularity.
        let raw = vec![vec![1, 0, 1], vec![], vec![0]];
        assert_eq!(Grid::from_rows(&raw), Err(GridError::EmptyRow { row: 1 }));
    }

    #[test]
    fn rejects_ragged_rows() {
        let raw = vec![vec![1, 0, 1], vec![0, 1]];
        assert_eq!(
            Grid::from_rows(&raw),
            Err(GridError::NotRectangular {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn raggedness_wins_over_cell_values() {
        // Row 0 holds an invalid value but the shape check runs first.
        let raw = vec![vec![7, 0], vec![0]];
        assert_eq!(
            Grid::from_rows(&raw),
            Err(GridError::NotRectangular {
                row: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn rejects_first_invalid_cell_in_row_major_order() {
        let raw = vec![vec![1, 0], vec![0, 3], vec![2, 1]];
        assert_eq!(
            Grid::from_rows(&raw),
            Err(GridError::InvalidCellValue {
                row: 1,
                col: 1,
                value: 3,
            })
        );
    }

    // ── Accessors ───────────────────────────────────────────────

    #[test]
    fn stores_cells_row_major() {
        let grid = Grid::from_rows(&fixtures::split_bar()).unwrap();
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 4);
        assert!(grid.is_land(Coord::new(0, 0)));
        assert!(grid.is_land(Coord::new(0, 1)));
        assert!(!grid.is_land(Coord::new(0, 2)));
        assert!(grid.is_land(Coord::new(0, 3)));
    }

    #[test]
    fn single_cell_grid() {
        let grid = Grid::from_rows(&[vec![1]]).unwrap();
        assert_eq!(grid.cell_count(), 1);
        assert_eq!(grid.cell(Coord::new(0, 0)), Cell::Land);
    }

    #[test]
    fn coords_iterates_row_major() {
        let grid = Grid::from_rows(&fixtures::open_water(2, 3)).unwrap();
        let coords: Vec<Coord> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 0),
                Coord::new(1, 1),
                Coord::new(1, 2),
            ]
        );
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn valid_grids_always_parse(raw in fixtures::arb_grid(8, 8)) {
            let grid = Grid::from_rows(&raw).unwrap();
            prop_assert_eq!(grid.rows(), raw.len());
            prop_assert_eq!(grid.cols(), raw[0].len());
            prop_assert_eq!(grid.cell_count(), raw.len() * raw[0].len());
            for coord in grid.coords() {
                prop_assert_eq!(
                    grid.is_land(coord),
                    raw[coord.row][coord.col] == 1
                );
            }
        }

        #[test]
        fn coords_covers_every_cell_exactly_once(raw in fixtures::arb_grid(6, 6)) {
            let grid = Grid::from_rows(&raw).unwrap();
            let coords: Vec<Coord> = grid.coords().collect();
            prop_assert_eq!(coords.len(), grid.cell_count());
            let mut sorted = coords.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), coords.len());
        }
    }
}
