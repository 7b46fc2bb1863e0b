//! # Kernel Core
//!
//! The low-level buffering and dispatch layer of the kernel: a
//! fixed-capacity ring buffer for interrupt-sourced data, device sinks
//! with a fan-out diagnostic writer, the syscall dispatch table, and
//! the idle reclaim loop.
//!
//! ## Philosophy
//!
//! **Testability is a first-class design constraint.**
//!
//! This layer runs in the most constrained context the kernel has: no
//! general-purpose allocation on hot paths, possible interrupt
//! reentrancy around the ring buffer, and fixed-size storage. Despite
//! that, every component takes its collaborators by injection (sinks,
//! port I/O, the scheduler), so the whole layer runs under `cargo test`
//! with fakes standing in for hardware.
//!
//! ## Components
//!
//! - [`RingBuffer`]: fixed-capacity FIFO, drop-on-overflow
//! - [`ScreenSink`], [`SerialSink`], [`NullSink`]: device sink variants
//! - [`DeviceRegistry`]: named sink lookup
//! - [`FanoutWriter`] / [`DiagnosticWriter`]: mirrored diagnostic output
//! - [`DispatchTable`]: syscall command routing
//! - [`IdleReclaimLoop`]: lowest-priority reclaim-and-yield loop

pub mod devices;
pub mod dispatch;
pub mod fanout;
pub mod idle;
pub mod registry;
pub mod ring_buffer;

pub use devices::{NullSink, ScreenSink, SerialSink, COM1, COM2};
pub use dispatch::{
    CallingType, DispatchAuditLog, DispatchEntry, DispatchError, DispatchEvent, DispatchOutcome,
    DispatchTable, DispatchTarget, HandlerFn, SysCallContext, SystemMessage,
};
pub use fanout::{DiagnosticWriter, FanoutWriter};
pub use idle::IdleReclaimLoop;
pub use registry::{share, DeviceRegistry, RegistryError, SharedSink};
pub use ring_buffer::RingBuffer;
