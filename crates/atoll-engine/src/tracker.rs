//! Island and visited-cell bookkeeping shared by both engines.
//!
//! One [`Tracker`] per finder instance holds the islands discovered so
//! far, the visited set, and the last-entered position. State only ever
//! grows — there is no reset. A [`SharedTracker`] wraps the tracker in
//! `Arc<Mutex<…>>` and takes the lock per operation, so a paced run
//! never holds it across a delay and observers can read mid-run.

use std::sync::{Arc, Mutex, MutexGuard};

use atoll_core::{Coord, IslandId};
use indexmap::IndexSet;

// ── Island ──────────────────────────────────────────────────────

/// An ordered group of land cells discovered as connected.
///
/// Cells appear in discovery order; an island is born with its first
/// cell and only ever grows by appension. Islands are never merged or
/// split within one traversal run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Island {
    cells: Vec<Coord>,
}

impl Island {
    fn new(seed: Coord) -> Self {
        Self { cells: vec![seed] }
    }

    /// Cells in discovery order. Never empty.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// The first cell recorded for this island.
    ///
    /// The upward expansion rule compares against this cell's column.
    pub fn seed(&self) -> Coord {
        self.cells[0]
    }

    /// Number of cells in the island. At least 1.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: an island is born with its seed cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` belongs to this island. Linear scan.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.iter().any(|&c| c == coord)
    }
}

// ── Tracker ─────────────────────────────────────────────────────

/// Bookkeeping state for one finder instance.
///
/// Assignment and visitation are distinct questions: the visited set
/// covers every coordinate whose processing has completed, land or
/// water, while assignment covers only land cells already placed into
/// an island.
#[derive(Debug, Default)]
pub struct Tracker {
    islands: Vec<Island>,
    visited: IndexSet<Coord>,
    current: Option<Coord>,
}

impl Tracker {
    /// Fresh tracker with no islands, no visited cells, no position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `coord` already belongs to any island.
    ///
    /// A plain linear scan over every island's cell list — bookkeeping,
    /// not throughput; cost is proportional to the assigned-cell count.
    pub fn is_assigned(&self, coord: Coord) -> bool {
        self.islands.iter().any(|island| island.contains(coord))
    }

    /// Start a new island containing only `coord` and return its id.
    pub fn create_island(&mut self, coord: Coord) -> IslandId {
        self.islands.push(Island::new(coord));
        IslandId(self.islands.len() - 1)
    }

    /// Append `coord` to an existing island.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tracker.
    pub fn append(&mut self, id: IslandId, coord: Coord) {
        self.islands[id.0].cells.push(coord);
    }

    /// Column of the island's seed cell.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tracker.
    pub fn seed_col(&self, id: IslandId) -> usize {
        self.islands[id.0].seed().col
    }

    /// Record that `coord`'s processing has completed.
    pub fn mark_visited(&mut self, coord: Coord) {
        self.visited.insert(coord);
    }

    /// Whether `coord`'s processing has completed.
    pub fn is_visited(&self, coord: Coord) -> bool {
        self.visited.contains(&coord)
    }

    /// Record `coord` as the most recently entered position.
    pub fn set_current(&mut self, coord: Coord) {
        self.current = Some(coord);
    }

    /// The most recently entered position, if any node was entered yet.
    pub fn current(&self) -> Option<Coord> {
        self.current
    }

    /// Islands discovered so far, in discovery order.
    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    /// Visited coordinates in the order their processing completed.
    pub fn visited(&self) -> impl Iterator<Item = Coord> + '_ {
        self.visited.iter().copied()
    }

    /// Number of visited coordinates.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

// ── SharedTracker ───────────────────────────────────────────────

/// Handle to a [`Tracker`] shared between a running traversal and
/// external observers.
///
/// Every operation takes the lock for its own duration only, so reads
/// interleave with a paced run's per-node pauses. Mutating operations
/// are crate-private: only a traversal writes.
#[derive(Clone, Debug, Default)]
pub struct SharedTracker {
    inner: Arc<Mutex<Tracker>>,
}

impl SharedTracker {
    /// Fresh shared tracker.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tracker> {
        self.inner.lock().unwrap()
    }

    pub(crate) fn is_assigned(&self, coord: Coord) -> bool {
        self.lock().is_assigned(coord)
    }

    pub(crate) fn create_island(&self, coord: Coord) -> IslandId {
        self.lock().create_island(coord)
    }

    pub(crate) fn append(&self, id: IslandId, coord: Coord) {
        self.lock().append(id, coord);
    }

    pub(crate) fn seed_col(&self, id: IslandId) -> usize {
        self.lock().seed_col(id)
    }

    pub(crate) fn mark_visited(&self, coord: Coord) {
        self.lock().mark_visited(coord);
    }

    pub(crate) fn is_visited(&self, coord: Coord) -> bool {
        self.lock().is_visited(coord)
    }

    pub(crate) fn set_current(&self, coord: Coord) {
        self.lock().set_current(coord);
    }

    /// Islands discovered so far, cloned out in discovery order.
    pub fn islands(&self) -> Vec<Island> {
        self.lock().islands().to_vec()
    }

    /// Visited coordinates, cloned out in completion order.
    pub fn visited(&self) -> Vec<Coord> {
        self.lock().visited().collect()
    }

    /// The most recently entered position.
    pub fn current_position(&self) -> Option<Coord> {
        self.lock().current()
    }

    /// A consistent point-in-time copy of the whole tracker, taken
    /// under a single lock acquisition.
    pub fn snapshot(&self) -> TrackerSnapshot {
        let guard = self.lock();
        TrackerSnapshot {
            islands: guard.islands().to_vec(),
            visited: guard.visited().collect(),
            current_position: guard.current(),
        }
    }
}

/// A point-in-time copy of a tracker's observable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerSnapshot {
    /// Islands in discovery order.
    pub islands: Vec<Island>,
    /// Visited coordinates in completion order.
    pub visited: Vec<Coord>,
    /// The most recently entered position.
    pub current_position: Option<Coord>,
}
