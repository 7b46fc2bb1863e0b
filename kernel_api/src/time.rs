//! Time abstractions

use core::ops::{Add, Sub};
use serde::{Deserialize, Serialize};

/// A duration of time
///
/// Durations are explicit values passed to the scheduler; a zero
/// duration is a pure yield. In simulated schedulers time can be
/// virtual, in real kernels it maps to timer ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Duration {
    /// Nanoseconds
    nanos: u64,
}

impl Duration {
    /// The zero duration (pure yield)
    pub const ZERO: Duration = Duration { nanos: 0 };

    /// Creates a duration from nanoseconds
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Creates a duration from milliseconds
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            nanos: millis * 1_000_000,
        }
    }

    /// Creates a duration from seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            nanos: secs * 1_000_000_000,
        }
    }

    /// Returns the duration in nanoseconds
    pub const fn as_nanos(&self) -> u64 {
        self.nanos
    }

    /// Returns the duration in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.nanos / 1_000_000
    }

    /// Returns whether this is the zero duration
    pub const fn is_zero(&self) -> bool {
        self.nanos == 0
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, other: Duration) -> Self::Output {
        Duration::from_nanos(self.nanos + other.nanos)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, other: Duration) -> Self::Output {
        Duration::from_nanos(self.nanos.saturating_sub(other.nanos))
    }
}
