//! Pacing and cancellation hooks for the traversal loop.
//!
//! Both engines run the identical traversal; a [`Stepper`] injects the
//! only two differences — whether a node entry can be refused
//! (cancellation) and whether the run pauses between nodes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::error::FindError;

/// Scheduling hooks invoked by the traversal loop.
pub trait Stepper {
    /// Called on entry to every node visitation, before any bookkeeping
    /// (including the visited check).
    ///
    /// # Errors
    ///
    /// Returning an error aborts the entire traversal: every pending
    /// sibling and ancestor expansion is abandoned and the error
    /// surfaces from the run.
    fn admit(&mut self) -> Result<(), FindError>;

    /// Called once per admitted, unassigned node — after the assignment
    /// check, before cell processing. Land and water alike.
    fn pause(&mut self);
}

/// Stepper for the immediate engine: admits every node, never pauses.
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

impl Stepper for Immediate {
    fn admit(&mut self) -> Result<(), FindError> {
        Ok(())
    }

    fn pause(&mut self) {}
}

/// Stepper for the paced engine.
///
/// Refuses admission once the shared stop flag is set, and sleeps for
/// the finding delay at each node. The flag is sticky: it is never
/// cleared, so a stopped finder also dooms any later paced run.
#[derive(Debug)]
pub struct Paced {
    delay: Duration,
    stopped: Arc<AtomicBool>,
}

impl Paced {
    /// Create a paced stepper observing `stopped`.
    pub fn new(delay: Duration, stopped: Arc<AtomicBool>) -> Self {
        Self { delay, stopped }
    }
}

impl Stepper for Paced {
    fn admit(&mut self) -> Result<(), FindError> {
        if self.stopped.load(Ordering::Acquire) {
            return Err(FindError::Cancelled);
        }
        Ok(())
    }

    fn pause(&mut self) {
        thread::sleep(self.delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_admits_forever() {
        let mut s = Immediate;
        for _ in 0..8 {
            assert_eq!(s.admit(), Ok(()));
        }
    }

    #[test]
    fn paced_admits_until_stopped() {
        let stopped = Arc::new(AtomicBool::new(false));
        let mut s = Paced::new(Duration::ZERO, Arc::clone(&stopped));
        assert_eq!(s.admit(), Ok(()));

        stopped.store(true, Ordering::Release);
        assert_eq!(s.admit(), Err(FindError::Cancelled));
        // Sticky: stays refused.
        assert_eq!(s.admit(), Err(FindError::Cancelled));
    }
}
