//! Syscall command dispatch.
//!
//! Every syscall request names a command; the dispatch table maps that
//! command either to an in-kernel handler or to the task that owns it.
//! The table is populated by registration calls during startup and
//! consulted once per incoming request.

use core_types::{CommandId, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// How the syscall was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallingType {
    /// Caller waits for the result
    Sync,
    /// Fire-and-forget
    Async,
}

/// Argument record carried by a syscall request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMessage {
    /// The command being requested
    pub target: CommandId,
    /// Raw argument registers
    pub args: [u32; 6],
}

impl SystemMessage {
    /// Creates a message with zeroed arguments
    pub fn new(target: CommandId) -> Self {
        Self {
            target,
            args: [0; 6],
        }
    }

    /// Sets the argument registers
    pub fn with_args(mut self, args: [u32; 6]) -> Self {
        self.args = args;
        self
    }
}

/// Per-call context handed to handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysCallContext {
    pub calling: CallingType,
    /// Mirrors the dispatched entry's debug flag
    pub debug: bool,
}

/// In-kernel handler for a command
pub type HandlerFn = fn(&SysCallContext, &SystemMessage) -> u32;

/// Who services a registered command.
///
/// A command is either handled inside the kernel or forwarded to the
/// task that owns it, never both. The variant makes the distinction
/// explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchTarget {
    /// Serviced by an in-kernel handler
    Handler(HandlerFn),
    /// Forwarded to the owning task
    Delegate(TaskId),
}

/// A dispatch table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchEntry {
    pub command: CommandId,
    pub target: DispatchTarget,
    /// When set, each dispatch of this command records a trace event
    pub debug: bool,
}

/// Result of servicing a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// An in-kernel handler ran and produced this value
    Completed(u32),
    /// The request must be forwarded to this task
    Delegated(TaskId),
}

/// Error types for dispatch operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// A command may have only one active registration
    #[error("Command already registered: {0}")]
    AlreadyRegistered(CommandId),

    /// No entry for the requested command
    #[error("Unknown command: {0}")]
    UnknownCommand(CommandId),

    /// Operation on a command that has no registration
    #[error("Command not registered: {0}")]
    NotRegistered(CommandId),
}

/// Dispatch event (for tracing and verification)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchEvent {
    /// A request arrived for this command
    Invoked {
        command: CommandId,
        calling: CallingType,
    },
    /// Debug-flagged entry: full argument trace
    Trace { command: CommandId, args: [u32; 6] },
    /// An in-kernel handler completed
    Completed { command: CommandId, result: u32 },
    /// The request was routed to the owning task
    Delegated { command: CommandId, task: TaskId },
    /// The request could not be serviced
    Rejected { command: CommandId, reason: String },
}

/// Audit log for the dispatch path
#[derive(Debug, Clone, Default)]
pub struct DispatchAuditLog {
    events: Vec<DispatchEvent>,
}

impl DispatchAuditLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn record(&mut self, event: DispatchEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[DispatchEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn has_event<F>(&self, predicate: F) -> bool
    where
        F: Fn(&DispatchEvent) -> bool,
    {
        self.events.iter().any(predicate)
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&DispatchEvent) -> bool,
    {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

/// Mapping from command identifiers to dispatch entries.
///
/// Subsystems register their commands at startup; the syscall entry
/// path looks up one entry per incoming request. Lookup of an unknown
/// command is a reportable error, never undefined behavior.
#[derive(Default)]
pub struct DispatchTable {
    entries: HashMap<CommandId, DispatchEntry>,
    audit: DispatchAuditLog,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            audit: DispatchAuditLog::new(),
        }
    }

    /// Registers a command.
    ///
    /// Fail-fast on duplicates: a command may have at most one active
    /// registration, and re-registering is rejected rather than
    /// silently replacing the handler.
    pub fn register(
        &mut self,
        command: CommandId,
        target: DispatchTarget,
        debug: bool,
    ) -> Result<(), DispatchError> {
        if self.entries.contains_key(&command) {
            return Err(DispatchError::AlreadyRegistered(command));
        }
        self.entries.insert(
            command,
            DispatchEntry {
                command,
                target,
                debug,
            },
        );
        Ok(())
    }

    /// Returns the entry for a command, or absent
    pub fn lookup(&self, command: CommandId) -> Option<&DispatchEntry> {
        self.entries.get(&command)
    }

    /// Removes a registration
    pub fn unregister(&mut self, command: CommandId) -> Result<(), DispatchError> {
        self.entries
            .remove(&command)
            .map(|_| ())
            .ok_or(DispatchError::NotRegistered(command))
    }

    /// Re-points an existing registration at an owning task
    pub fn set_delegate(&mut self, command: CommandId, task: TaskId) -> Result<(), DispatchError> {
        let entry = self
            .entries
            .get_mut(&command)
            .ok_or(DispatchError::NotRegistered(command))?;
        entry.target = DispatchTarget::Delegate(task);
        Ok(())
    }

    /// Services one request.
    ///
    /// Runs the in-kernel handler for `Handler` entries; for `Delegate`
    /// entries the caller forwards the request to the returned task.
    /// Unknown commands are rejected with an explicit error. Every
    /// dispatch is recorded in the audit log; entries with the debug
    /// flag additionally record a full argument trace.
    pub fn dispatch(
        &mut self,
        calling: CallingType,
        msg: &SystemMessage,
    ) -> Result<DispatchOutcome, DispatchError> {
        let command = msg.target;
        self.audit.record(DispatchEvent::Invoked { command, calling });

        let entry = match self.entries.get(&command) {
            Some(entry) => *entry,
            None => {
                self.audit.record(DispatchEvent::Rejected {
                    command,
                    reason: "unknown command".to_string(),
                });
                return Err(DispatchError::UnknownCommand(command));
            }
        };

        if entry.debug {
            self.audit.record(DispatchEvent::Trace {
                command,
                args: msg.args,
            });
        }

        match entry.target {
            DispatchTarget::Handler(handler) => {
                let ctx = SysCallContext {
                    calling,
                    debug: entry.debug,
                };
                let result = handler(&ctx, msg);
                self.audit.record(DispatchEvent::Completed { command, result });
                Ok(DispatchOutcome::Completed(result))
            }
            DispatchTarget::Delegate(task) => {
                self.audit.record(DispatchEvent::Delegated { command, task });
                Ok(DispatchOutcome::Delegated(task))
            }
        }
    }

    /// Returns the audit log
    pub fn audit_log(&self) -> &DispatchAuditLog {
        &self.audit
    }

    /// Clears the audit log
    pub fn clear_audit_log(&mut self) {
        self.audit.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
