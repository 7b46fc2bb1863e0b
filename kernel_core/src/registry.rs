//! Named device registry.
//!
//! Maps device names to shared sink handles. The registry is an owned
//! value injected into whatever needs device lookup; there is no
//! ambient global table, which keeps the core testable without live
//! hardware.

use hal::DeviceSink;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Shared handle to a device sink.
///
/// Sinks are shared between the registry and the fan-out writer.
/// Single-threaded shared mutability is intentional: this layer runs
/// non-reentrant with no internal locking, and the type encodes that.
pub type SharedSink = Rc<RefCell<dyn DeviceSink>>;

/// Wraps a sink into a shared handle
pub fn share<S: DeviceSink + 'static>(sink: S) -> SharedSink {
    Rc::new(RefCell::new(sink))
}

/// Well-known device names
pub mod names {
    /// First serial port
    pub const SERIAL1: &str = "/dev/ttyS0";
    /// Console output
    pub const CONSOLE: &str = "/dev/console";
    /// Discard device
    pub const NULL: &str = "/dev/null";
    /// Kernel diagnostic message device
    pub const KMSG: &str = "/dev/kmsg";
}

/// Error types for registry operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A sink is already registered under this name
    #[error("Device already registered: {0}")]
    AlreadyRegistered(String),

    /// No sink registered under this name
    #[error("Device not found: {0}")]
    NotFound(String),
}

/// Registry of named device sinks
#[derive(Default)]
pub struct DeviceRegistry {
    sinks: HashMap<String, SharedSink>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            sinks: HashMap::new(),
        }
    }

    /// Registers a sink under a name.
    ///
    /// Registration is fail-fast: a second registration under the same
    /// name is rejected rather than silently replacing the first.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        sink: SharedSink,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.sinks.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        self.sinks.insert(name, sink);
        Ok(())
    }

    /// Looks up a sink by name, returning a shared handle or absent
    pub fn get(&self, name: &str) -> Option<SharedSink> {
        self.sinks.get(name).cloned()
    }

    /// Removes a registration
    pub fn unregister(&mut self, name: &str) -> Result<(), RegistryError> {
        self.sinks
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}
