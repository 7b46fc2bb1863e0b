//! Unique identifiers for system entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Numeric identifier for a syscall command
///
/// Every syscall request carries one of these; the dispatch table maps
/// it to the handler or task responsible for servicing the request.
/// Uniqueness among active registrations is enforced at registration
/// time, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommandId(u32);

impl CommandId {
    /// Creates a command ID from its numeric value
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command({})", self.0)
    }
}

/// Unique identifier for a task
///
/// Tasks are execution contexts managed by the external scheduler. The
/// dispatch table uses a task ID to name the owner of a delegated
/// command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task({})", self.0)
    }
}
