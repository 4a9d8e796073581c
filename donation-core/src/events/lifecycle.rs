//! Capabilities shared by host events.

use std::sync::atomic::{AtomicBool, Ordering};

/// An event that handlers may veto before its side effect runs.
///
/// Cancellation is one-way: once cancelled, an event stays cancelled.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;

    /// Mark the event as cancelled. Idempotent.
    fn cancel(&self);
}

/// An event raised on behalf of a specific actor (e.g. a connected player).
pub trait ActorBound {
    type Actor;

    fn actor(&self) -> &Self::Actor;
}

/// Monotonic cancellation flag.
///
/// Uses an atomic so handlers can cancel through a shared reference; the
/// first `cancel` wins and no call can clear it.
#[derive(Debug, Default)]
pub struct CancellationFlag(AtomicBool);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Set the flag. Returns `true` if this call was the one that set it.
    pub fn set(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }
}

impl Clone for CancellationFlag {
    fn clone(&self) -> Self {
        Self(AtomicBool::new(self.is_set()))
    }
}
