//! Scheduler capability trait

use crate::{Duration, KernelError};

/// Capability interface to the external thread/process scheduler
///
/// The buffering/dispatch core never schedules anything itself; it asks
/// the scheduler to do so through this trait. Multiple implementations
/// are possible: the real scheduler, or a test double that records
/// calls.
///
/// Both operations are bounded in time and safe to call from the idle
/// loop.
pub trait Scheduler {
    /// Voluntarily relinquishes the processor for at least `duration`.
    ///
    /// A zero duration yields without a deadline: the caller runs again
    /// whenever the scheduler next selects it.
    fn sleep(&mut self, duration: Duration) -> Result<(), KernelError>;

    /// Releases the resources of execution contexts that have
    /// terminated since the last call. Returns how many were reclaimed.
    fn reclaim_terminated(&mut self) -> usize;
}
