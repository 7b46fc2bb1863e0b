//! # x86_64 Hardware Bindings
//!
//! This crate implements the HAL traits against real x86_64 hardware:
//! port I/O through `in`/`out` instructions and text output through the
//! VGA text buffer.
//!
//! Everything here requires ring 0 and correctly mapped hardware; the
//! unsafe code is isolated to small, auditable functions.

pub mod port_io;
pub mod vga;

pub use port_io::RealPortIo;
pub use vga::{VgaTextScreen, VGA_HEIGHT, VGA_TEXT_BASE, VGA_WIDTH};
