//! The traversal procedure shared by both engines.
//!
//! One frame-stack implementation of the node-visitation rule; the
//! engines differ only in the [`Stepper`] they plug in. The explicit
//! stack replaces the natural recursion so that island-sized grids
//! cannot exhaust the call stack.
//!
//! # Expansion rule
//!
//! From a land cell, neighbors are expanded depth-first in a fixed
//! order — right, left, down, up — but the left and up directions are
//! conditional on how the cell was reached:
//!
//! - a top-level (sweep-seeded) visitation expands only right and down;
//! - a propagated visitation (one carrying an island id) also looks
//!   left, and up when the cell's column differs from the column of
//!   the island's seed cell.
//!
//! This asymmetric rule is the contract of the system. It can leave
//! cells connected only through a skipped direction in separate
//! islands; that is intended behavior, not a defect to correct.

use crossbeam_channel::Sender;
use smallvec::SmallVec;
use tracing::trace;

use atoll_core::{Coord, IslandId};
use atoll_grid::Grid;

use crate::error::FindError;
use crate::stepper::Stepper;
use crate::tracker::SharedTracker;

// ── ProgressEvent ───────────────────────────────────────────────

/// A progress notification emitted while a traversal runs.
///
/// Delivery is best-effort: a dropped receiver never blocks or fails
/// the traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The traversal entered a node; this is the new current position.
    Entered(Coord),
    /// A fresh land cell founded a new island.
    Founded {
        /// Id of the new island.
        id: IslandId,
        /// Its seed cell.
        coord: Coord,
    },
    /// A land cell was appended to an existing island.
    Claimed {
        /// Id of the island that grew.
        id: IslandId,
        /// The appended cell.
        coord: Coord,
    },
}

// ── Frames ──────────────────────────────────────────────────────

/// One pending step of the depth-first expansion.
///
/// `Enter` performs the visitation rule for a node; `Exit` marks the
/// node visited once its whole expansion has unwound. The two phases
/// reproduce exactly what call and return would do in a recursive
/// rendition: a node is marked visited only after every neighbor
/// expansion it spawned has completed.
enum Frame {
    Enter {
        coord: Coord,
        island: Option<IslandId>,
    },
    Exit {
        coord: Coord,
    },
}

// ── Traversal ───────────────────────────────────────────────────

/// A single traversal run over a validated grid.
///
/// Borrows the grid and the shared tracker; owns its stepper. Built by
/// the finder for each run — the tracker it mutates persists on the
/// finder afterwards.
pub struct Traversal<'a, S> {
    grid: &'a Grid,
    tracker: &'a SharedTracker,
    stepper: S,
    events: Option<Sender<ProgressEvent>>,
}

impl<'a, S: Stepper> Traversal<'a, S> {
    /// New traversal with no event subscriber.
    pub fn new(grid: &'a Grid, tracker: &'a SharedTracker, stepper: S) -> Self {
        Self {
            grid,
            tracker,
            stepper,
            events: None,
        }
    }

    /// Attach a progress-event subscriber.
    pub fn with_events(mut self, events: Sender<ProgressEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Row-major sweep: seed a visitation at every coordinate.
    ///
    /// Visitation is idempotent on already-visited coordinates, so the
    /// sweep only produces new work for cells the earlier expansions
    /// never reached; islands are fully discovered on first contact.
    ///
    /// # Errors
    ///
    /// Returns [`FindError::Cancelled`] if the stepper refuses an
    /// admission; bookkeeping accumulated so far is left in place.
    pub fn run(&mut self) -> Result<(), FindError> {
        for coord in self.grid.coords() {
            self.visit(coord)?;
        }
        Ok(())
    }

    /// Visit `start` as a fresh top-level entry and expand from there.
    fn visit(&mut self, start: Coord) -> Result<(), FindError> {
        let mut stack = vec![Frame::Enter {
            coord: start,
            island: None,
        }];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Exit { coord } => self.tracker.mark_visited(coord),
                Frame::Enter { coord, island } => self.enter(coord, island, &mut stack)?,
            }
        }
        Ok(())
    }

    /// The node-visitation rule.
    fn enter(
        &mut self,
        coord: Coord,
        island: Option<IslandId>,
        stack: &mut Vec<Frame>,
    ) -> Result<(), FindError> {
        self.stepper.admit()?;

        if self.tracker.is_visited(coord) {
            return Ok(());
        }

        self.tracker.set_current(coord);
        trace!(row = coord.row, col = coord.col, "current position");
        self.emit(ProgressEvent::Entered(coord));

        // A cell already claimed by an island stops re-expansion here;
        // its own Enter frame owns the visited mark.
        if self.tracker.is_assigned(coord) {
            return Ok(());
        }

        self.stepper.pause();

        if self.grid.is_land(coord) {
            let id = match island {
                Some(id) => {
                    self.tracker.append(id, coord);
                    self.emit(ProgressEvent::Claimed { id, coord });
                    id
                }
                None => {
                    let id = self.tracker.create_island(coord);
                    self.emit(ProgressEvent::Founded { id, coord });
                    id
                }
            };

            stack.push(Frame::Exit { coord });
            // Frames pop LIFO: push the expansion set in reverse so the
            // neighbors are entered in rule order.
            for next in self.expansion(coord, island.is_some(), id).into_iter().rev() {
                stack.push(Frame::Enter {
                    coord: next,
                    island: Some(id),
                });
            }
        } else {
            self.tracker.mark_visited(coord);
        }

        Ok(())
    }

    /// Neighbor cells to expand from `coord`, in expansion order.
    ///
    /// `propagated` is whether this visitation carried an island id in;
    /// the conditions depend only on bounds, propagation context, and
    /// the island's seed column — all immutable — so evaluating them
    /// here at push time matches evaluating them lazily between
    /// expansions.
    fn expansion(&self, coord: Coord, propagated: bool, id: IslandId) -> SmallVec<[Coord; 4]> {
        let mut next = SmallVec::new();
        if coord.col + 1 < self.grid.cols() {
            next.push(Coord::new(coord.row, coord.col + 1));
        }
        if propagated && coord.col > 0 {
            next.push(Coord::new(coord.row, coord.col - 1));
        }
        if coord.row + 1 < self.grid.rows() {
            next.push(Coord::new(coord.row + 1, coord.col));
        }
        if propagated && coord.row > 0 && self.tracker.seed_col(id) != coord.col {
            next.push(Coord::new(coord.row - 1, coord.col));
        }
        next
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(tx) = &self.events {
            // Best-effort — the observer may have dropped its receiver.
            let _ = tx.send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::Immediate;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    fn run_immediate(raw: &[Vec<u8>]) -> SharedTracker {
        let grid = Grid::from_rows(raw).unwrap();
        let tracker = SharedTracker::new();
        Traversal::new(&grid, &tracker, Immediate)
            .run()
            .expect("immediate traversal cannot be cancelled");
        tracker
    }

    // ── Discovery order pins ────────────────────────────────────
    //
    // These lock down the exact orders the asymmetric rule produces;
    // a textbook flood fill would pass the membership checks in the
    // integration tests but fail these.

    #[test]
    fn full_block_discovery_order() {
        let tracker = run_immediate(&[vec![1, 1], vec![1, 1]]);
        let islands = tracker.islands();
        assert_eq!(islands.len(), 1);
        assert_eq!(
            islands[0].cells(),
            &[c(0, 0), c(0, 1), c(1, 1), c(1, 0)]
        );
    }

    #[test]
    fn full_block_visited_order() {
        let tracker = run_immediate(&[vec![1, 1], vec![1, 1]]);
        assert_eq!(
            tracker.visited(),
            vec![c(1, 0), c(1, 1), c(0, 1), c(0, 0)]
        );
    }

    #[test]
    fn split_bar_visited_order() {
        let tracker = run_immediate(&[vec![1, 1, 0, 1]]);
        assert_eq!(
            tracker.visited(),
            vec![c(0, 2), c(0, 1), c(0, 0), c(0, 3)]
        );
    }

    #[test]
    fn vertical_bar_is_one_island() {
        let tracker = run_immediate(&[vec![1], vec![1], vec![1]]);
        let islands = tracker.islands();
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].cells(), &[c(0, 0), c(1, 0), c(2, 0)]);
    }

    #[test]
    fn current_position_is_last_entered() {
        let tracker = run_immediate(&[vec![1, 1, 0, 1]]);
        // The sweep's last fresh entry is the trailing land cell.
        assert_eq!(tracker.current_position(), Some(c(0, 3)));
    }

    // ── Water handling ──────────────────────────────────────────

    #[test]
    fn water_is_visited_but_never_assigned() {
        let tracker = run_immediate(&[vec![0, 1]]);
        assert_eq!(tracker.islands().len(), 1);
        let visited = tracker.visited();
        assert!(visited.contains(&c(0, 0)));
        assert!(!tracker.islands()[0].contains(c(0, 0)));
    }

    #[test]
    fn every_cell_is_visited_after_a_full_run() {
        let raw = vec![vec![1, 0, 1], vec![0, 1, 0]];
        let tracker = run_immediate(&raw);
        assert_eq!(tracker.visited().len(), 6);
    }

    // ── Events ──────────────────────────────────────────────────

    #[test]
    fn events_trace_the_discovery() {
        let grid = Grid::from_rows(&[vec![1, 1, 0, 1]]).unwrap();
        let tracker = SharedTracker::new();
        let (tx, rx) = crossbeam_channel::unbounded();
        Traversal::new(&grid, &tracker, Immediate)
            .with_events(tx)
            .run()
            .expect("immediate traversal cannot be cancelled");

        let events: Vec<ProgressEvent> = rx.try_iter().collect();
        let founded: Vec<Coord> = events
            .iter()
            .filter_map(|e| match e {
                ProgressEvent::Founded { coord, .. } => Some(*coord),
                _ => None,
            })
            .collect();
        let claimed: Vec<Coord> = events
            .iter()
            .filter_map(|e| match e {
                ProgressEvent::Claimed { coord, .. } => Some(*coord),
                _ => None,
            })
            .collect();
        assert_eq!(founded, vec![c(0, 0), c(0, 3)]);
        assert_eq!(claimed, vec![c(0, 1)]);
        assert_eq!(events.first(), Some(&ProgressEvent::Entered(c(0, 0))));
    }

    #[test]
    fn dropped_receiver_does_not_abort_the_run() {
        let grid = Grid::from_rows(&[vec![1, 1], vec![1, 1]]).unwrap();
        let tracker = SharedTracker::new();
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        let result = Traversal::new(&grid, &tracker, Immediate)
            .with_events(tx)
            .run();
        assert_eq!(result, Ok(()));
        assert_eq!(tracker.islands().len(), 1);
    }
}
