//! Error types for grid validation.

use std::fmt;

/// Errors detected while validating raw grid rows.
///
/// Checks run in a fixed order and the first failing check determines
/// the error; later checks are not reached. Emptiness of individual
/// rows is checked for every row before rectangularity, so a grid that
/// is both ragged and contains an empty row reports [`EmptyRow`].
///
/// [`EmptyRow`]: GridError::EmptyRow
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows at all.
    NoRows,
    /// A row has zero columns.
    EmptyRow {
        /// Zero-based index of the offending row.
        row: usize,
    },
    /// Rows have differing lengths.
    NotRectangular {
        /// Zero-based index of the first row whose length differs from row 0.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A cell holds a raw value other than 0 or 1.
    InvalidCellValue {
        /// Zero-based row of the offending cell.
        row: usize,
        /// Zero-based column of the offending cell.
        col: usize,
        /// The raw value found there.
        value: u8,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRows => write!(f, "grid must have at least one row"),
            Self::EmptyRow { row } => {
                write!(f, "row {row} must contain at least one cell")
            }
            Self::NotRectangular {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "row {row} has {found} cells, expected {expected} (all rows must share one length)"
                )
            }
            Self::InvalidCellValue { row, col, value } => {
                write!(
                    f,
                    "cell ({row}, {col}) holds {value}, expected 0 (water) or 1 (land)"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
