//! Traversal engines for Atoll island discovery.
//!
//! [`IslandFinder`] is the user-facing API. Two engines share one
//! instance's bookkeeping:
//!
//! - [`IslandFinder::run_sync`] — the immediate engine: a blocking
//!   row-major sweep that discovers every island before returning.
//! - [`IslandFinder::run_paced`] — the paced engine: the identical
//!   sweep on a background thread, suspending for the configured
//!   finding delay at each node and cancellable via `stop()`. Intended
//!   to drive progressive observation (animation, logging) of the
//!   search as it proceeds.
//!
//! Both engines run the same traversal procedure ([`traverse`]); a
//! [`Stepper`] injects the only differences — admission at node entry
//! and the per-node pause — so visitation order, island membership, and
//! per-island cell ordering are identical between them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod finder;
pub mod paced;
pub mod stepper;
pub mod tracker;
pub mod traverse;

pub use error::FindError;
pub use finder::IslandFinder;
pub use paced::PacedRun;
pub use stepper::{Immediate, Paced, Stepper};
pub use tracker::{Island, SharedTracker, Tracker, TrackerSnapshot};
pub use traverse::{ProgressEvent, Traversal};
