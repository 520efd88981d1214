//! The user-facing island finder.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::debug;

use atoll_core::Coord;
use atoll_grid::{Grid, GridError};

use crate::paced::PacedRun;
use crate::stepper::{Immediate, Paced};
use crate::tracker::{Island, SharedTracker, TrackerSnapshot};
use crate::traverse::Traversal;

/// Discovers connected groups of land cells in a rectangular grid.
///
/// Constructed over raw row data; validation runs at the start of each
/// run entry point, never at construction. Two engines share the
/// instance's bookkeeping: [`run_sync`](Self::run_sync) blocks until
/// every island is discovered, while [`run_paced`](Self::run_paced)
/// performs the identical traversal on a background thread, pausing for
/// the finding delay at each node so external observers can watch the
/// search advance through [`islands`](Self::islands),
/// [`visited`](Self::visited), [`current_position`](Self::current_position),
/// or a consistent [`snapshot`](Self::snapshot).
///
/// # State lifetime
///
/// Islands, the visited set, and the current position grow
/// monotonically for the lifetime of the finder; there is no reset. A
/// second run sees every coordinate already visited and discovers
/// nothing new — construct a fresh finder to search again from scratch.
/// The stop flag is equally sticky: once [`stop`](Self::stop) has been
/// called, every subsequent paced run is refused at its first node.
///
/// # Concurrency
///
/// One traversal at a time. Each bookkeeping operation is individually
/// synchronized, but the interleaving of two simultaneous runs is not:
/// running them concurrently against one finder yields undefined
/// results. Callers must serialize use per instance.
#[derive(Debug)]
pub struct IslandFinder {
    raw: Vec<Vec<u8>>,
    delay: Duration,
    tracker: SharedTracker,
    stopped: Arc<AtomicBool>,
}

impl IslandFinder {
    /// Create a finder over raw grid rows with no finding delay.
    pub fn new(raw: Vec<Vec<u8>>) -> Self {
        Self::with_delay(raw, Duration::ZERO)
    }

    /// Create a finder with a per-node finding delay.
    ///
    /// The delay applies only to paced runs; the immediate engine
    /// ignores it.
    pub fn with_delay(raw: Vec<Vec<u8>>, delay: Duration) -> Self {
        Self {
            raw,
            delay,
            tracker: SharedTracker::new(),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The configured per-node finding delay.
    pub fn finding_delay(&self) -> Duration {
        self.delay
    }

    /// Run the immediate engine to completion.
    ///
    /// Validates the grid, then sweeps all coordinates row-major,
    /// visiting each as a fresh top-level entry. Unaffected by
    /// [`stop`](Self::stop).
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; in that case no
    /// bookkeeping was touched.
    pub fn run_sync(&mut self) -> Result<(), GridError> {
        let grid = Grid::from_rows(&self.raw)?;
        Traversal::new(&grid, &self.tracker, Immediate)
            .run()
            .expect("immediate stepper admits every node");
        Ok(())
    }

    /// Run the paced engine on a background thread.
    ///
    /// Validates synchronously — a malformed grid is reported here and
    /// no thread is spawned. On success the traversal starts
    /// immediately; the returned [`PacedRun`] handle carries its
    /// progress-event stream and eventual outcome. Dropping the handle
    /// without joining detaches the run: it keeps mutating this
    /// finder's bookkeeping until it finishes or is stopped.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; nothing was scheduled.
    pub fn run_paced(&self) -> Result<PacedRun, GridError> {
        let grid = Grid::from_rows(&self.raw)?;
        let tracker = self.tracker.clone();
        let stopped = Arc::clone(&self.stopped);
        let delay = self.delay;
        let (event_tx, event_rx) = crossbeam_channel::unbounded();

        let handle = thread::Builder::new()
            .name("atoll-finder".into())
            .spawn(move || {
                let stepper = Paced::new(delay, stopped);
                let result = Traversal::new(&grid, &tracker, stepper)
                    .with_events(event_tx)
                    .run();
                if let Err(err) = &result {
                    debug!("paced traversal aborted: {err}");
                }
                result
            })
            .expect("failed to spawn finder thread");

        Ok(PacedRun::new(handle, event_rx, Arc::clone(&self.stopped)))
    }

    /// Request cancellation of a paced run.
    ///
    /// Cooperative: takes effect at the next node entry, so an
    /// in-flight per-node delay still elapses first. Sticky and
    /// idempotent; never affects [`run_sync`](Self::run_sync).
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Islands discovered so far, in discovery order. Readable at any
    /// time, including while a paced run is executing.
    pub fn islands(&self) -> Vec<Island> {
        self.tracker.islands()
    }

    /// Coordinates whose processing has completed, in completion order.
    pub fn visited(&self) -> Vec<Coord> {
        self.tracker.visited()
    }

    /// The most recently entered coordinate, if any.
    pub fn current_position(&self) -> Option<Coord> {
        self.tracker.current_position()
    }

    /// A consistent point-in-time copy of the observable state.
    pub fn snapshot(&self) -> TrackerSnapshot {
        self.tracker.snapshot()
    }
}
