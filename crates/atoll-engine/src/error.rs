//! Error types for traversal runs.

use std::error::Error;
use std::fmt;

use atoll_grid::GridError;

/// Errors surfaced by the traversal engines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FindError {
    /// The raw grid failed validation; nothing was scheduled and no
    /// bookkeeping was touched.
    Grid(GridError),
    /// A paced run was cancelled via `stop()`, observed at a node entry.
    ///
    /// Islands and visited cells accumulated before the cancellation
    /// point remain valid and inspectable on the finder.
    Cancelled,
}

impl fmt::Display for FindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::Cancelled => write!(f, "traversal cancelled"),
        }
    }
}

impl Error for FindError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Cancelled => None,
        }
    }
}

impl From<GridError> for FindError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
