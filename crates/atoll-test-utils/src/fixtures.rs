//! Reusable raw-grid fixtures.

use proptest::prelude::*;

/// Single row with a gap: `[[1, 1, 0, 1]]`. Two islands — one holding
/// both leading cells, one holding the trailing cell.
pub fn split_bar() -> Vec<Vec<u8>> {
    vec![vec![1, 1, 0, 1]]
}

/// Diagonal land cells with no 4-adjacency: `[[1, 0], [0, 1]]`.
/// Two singleton islands; diagonal adjacency never merges.
pub fn diagonal_pair() -> Vec<Vec<u8>> {
    vec![vec![1, 0], vec![0, 1]]
}

/// Fully-landed 2×2 block: `[[1, 1], [1, 1]]`. One island containing
/// all four cells.
pub fn full_block() -> Vec<Vec<u8>> {
    vec![vec![1, 1], vec![1, 1]]
}

/// An all-water grid of the given dimensions.
pub fn open_water(rows: usize, cols: usize) -> Vec<Vec<u8>> {
    vec![vec![0; cols]; rows]
}

/// An all-land grid of the given dimensions.
pub fn landmass(rows: usize, cols: usize) -> Vec<Vec<u8>> {
    vec![vec![1; cols]; rows]
}

/// Strategy producing arbitrary valid (non-empty, rectangular, 0/1)
/// raw grids up to the given dimensions.
pub fn arb_grid(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1..=max_rows, 1..=max_cols).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0u8..=1, cols), rows)
    })
}
