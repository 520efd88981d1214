//! Validated grid storage for the Atoll island finder.
//!
//! [`Grid::from_rows`] is the single entry point: it runs the full
//! validation sequence over raw row data, and the [`Grid`] it returns is
//! guaranteed non-empty, rectangular, and well-valued. Traversal code
//! never re-validates — an invalid grid is unrepresentable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
