//! # Hardware Abstraction Layer (HAL)
//!
//! This crate defines hardware abstraction traits.
//!
//! ## Philosophy
//!
//! **Hardware must be fully abstracted and swappable.**
//!
//! No architecture-specific assumptions leak into core logic. The HAL
//! provides traits that architecture-specific crates implement.
//!
//! ## Design Principles
//!
//! 1. **Trait-based**: all hardware operations go through traits
//! 2. **Testable**: every trait ships with a fake implementation so the
//!    core can be exercised without hardware
//! 3. **Minimal unsafe**: hardware access requires unsafe, but it lives
//!    in the implementing crates, not here

pub mod port_io;
pub mod sink;
pub mod text_output;

pub use port_io::{FakePortIo, PortIo};
pub use sink::{DeviceSink, FakeSink};
pub use text_output::{FakeTextOutput, TextOutput};
