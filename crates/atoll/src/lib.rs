//! Atoll: island discovery over binary grids.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Atoll sub-crates. For most users, adding `atoll` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use atoll::prelude::*;
//!
//! // 1 = land, 0 = water.
//! let mut finder = IslandFinder::new(vec![
//!     vec![1, 1, 0, 0],
//!     vec![0, 1, 0, 1],
//! ]);
//! finder.run_sync().unwrap();
//!
//! let islands = finder.islands();
//! assert_eq!(islands.len(), 2);
//! assert_eq!(islands[0].seed(), Coord::new(0, 0));
//! ```
//!
//! For progressive observation, construct the finder with a delay and
//! run the paced engine instead:
//!
//! ```rust
//! use std::time::Duration;
//! use atoll::prelude::*;
//!
//! let finder = IslandFinder::with_delay(vec![vec![1, 0, 1]], Duration::from_millis(1));
//! let run = finder.run_paced().unwrap();
//! for event in run.events().iter() {
//!     // Drive an animation or log the search as it advances.
//!     let _ = event;
//! }
//! run.join().unwrap();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `atoll-core` | Coordinates, cell values, island ids |
//! | [`grid`] | `atoll-grid` | Grid validation and storage |
//! | [`engine`] | `atoll-engine` | The traversal engines and bookkeeping |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary types (`atoll-core`).
pub use atoll_core as types;

/// Grid validation and storage (`atoll-grid`).
///
/// [`grid::Grid::from_rows`] is the validation entry point; both run
/// entry points call it before touching any bookkeeping.
pub use atoll_grid as grid;

/// Traversal engines and bookkeeping (`atoll-engine`).
///
/// [`engine::IslandFinder`] for discovery, [`engine::PacedRun`] for
/// observing and cancelling a paced run.
pub use atoll_engine as engine;

/// Common imports for typical Atoll usage.
///
/// ```rust
/// use atoll::prelude::*;
/// ```
pub mod prelude {
    pub use atoll_core::{Cell, Coord, IslandId};
    pub use atoll_engine::{
        FindError, Island, IslandFinder, PacedRun, ProgressEvent, TrackerSnapshot,
    };
    pub use atoll_grid::{Grid, GridError};
}
