//! Handle to a running paced traversal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::Receiver;

use crate::error::FindError;
use crate::traverse::ProgressEvent;

/// Handle to a paced traversal executing on a background thread.
///
/// Returned by [`IslandFinder::run_paced`](crate::IslandFinder::run_paced)
/// after validation succeeded. The handle is the run's observer side:
/// it receives progress events, can request cancellation, and joins for
/// the final outcome. Dropping it without joining detaches the run —
/// the thread keeps mutating the finder's bookkeeping until it finishes
/// or is stopped, and remains observable through the finder itself.
#[derive(Debug)]
pub struct PacedRun {
    handle: JoinHandle<Result<(), FindError>>,
    events: Receiver<ProgressEvent>,
    stopped: Arc<AtomicBool>,
}

impl PacedRun {
    pub(crate) fn new(
        handle: JoinHandle<Result<(), FindError>>,
        events: Receiver<ProgressEvent>,
        stopped: Arc<AtomicBool>,
    ) -> Self {
        Self {
            handle,
            events,
            stopped,
        }
    }

    /// Request cancellation.
    ///
    /// Sets the same sticky flag as
    /// [`IslandFinder::stop`](crate::IslandFinder::stop): the run aborts
    /// at its next node entry with [`FindError::Cancelled`]. Idempotent.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Whether the background thread has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Progress events emitted by the run, in visitation order.
    ///
    /// The channel is unbounded and disconnects when the run finishes,
    /// so draining after [`is_finished`](Self::is_finished) yields the
    /// complete trace.
    pub fn events(&self) -> &Receiver<ProgressEvent> {
        &self.events
    }

    /// Block until the run completes and return its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`FindError::Cancelled`] if the run was stopped before
    /// completing its sweep.
    pub fn join(self) -> Result<(), FindError> {
        self.handle.join().expect("finder thread panicked")
    }
}
