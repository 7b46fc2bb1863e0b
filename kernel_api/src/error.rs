//! Kernel error types

use thiserror::Error;

/// Errors reported by external kernel collaborators
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KernelError {
    /// Operation timed out
    #[error("Operation timed out")]
    Timeout,

    /// A resource pool is exhausted
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// The scheduler rejected or could not complete a request
    #[error("Scheduler unavailable: {0}")]
    SchedulerUnavailable(String),
}
