//! Idle reclaim loop.
//!
//! The lowest-priority unit of work in the system: whenever nothing
//! else is ready, it asks the scheduler to reclaim terminated execution
//! contexts and yields again.

use kernel_api::{Duration, KernelError, Scheduler};

/// Cooperative background loop that reclaims terminated contexts.
///
/// One iteration reclaims, then relinquishes the processor. The loop
/// holds no state of its own beyond its configured yield interval.
/// It never allocates and never acquires contended resources, since it
/// runs exactly when the system has nothing better to do.
#[derive(Debug)]
pub struct IdleReclaimLoop {
    interval: Duration,
}

impl IdleReclaimLoop {
    /// Creates a loop that yields with no deadline between iterations
    pub fn new() -> Self {
        Self {
            interval: Duration::ZERO,
        }
    }

    /// Creates a loop that sleeps `interval` between iterations
    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }

    /// Runs a single iteration: reclaim, then yield.
    ///
    /// Returns the number of contexts reclaimed this pass.
    pub fn step(&mut self, scheduler: &mut dyn Scheduler) -> Result<usize, KernelError> {
        let reclaimed = scheduler.reclaim_terminated();
        scheduler.sleep(self.interval)?;
        Ok(reclaimed)
    }

    /// Runs forever.
    ///
    /// Only a scheduler failure ends the loop; a healthy system never
    /// returns from here.
    pub fn run(&mut self, scheduler: &mut dyn Scheduler) -> Result<(), KernelError> {
        loop {
            self.step(scheduler)?;
        }
    }
}

impl Default for IdleReclaimLoop {
    fn default() -> Self {
        Self::new()
    }
}
