//! Device sink variants.
//!
//! Thin adapters from the [`DeviceSink`] capability onto the screen and
//! serial primitives, plus the discard-everything null sink. None of
//! them buffer; every call goes straight to the underlying device.

use hal::{DeviceSink, PortIo, TextOutput};

/// Serial port base addresses
pub const COM1: u16 = 0x3F8;
pub const COM2: u16 = 0x2F8;

/// Sink that renders each byte as a character on the screen.
///
/// Reading is unsupported and reports zero bytes.
pub struct ScreenSink<T: TextOutput> {
    screen: T,
}

impl<T: TextOutput> ScreenSink<T> {
    pub fn new(screen: T) -> Self {
        Self { screen }
    }

    /// Access to the underlying screen, mainly for inspection in tests
    pub fn screen(&self) -> &T {
        &self.screen
    }
}

impl<T: TextOutput> DeviceSink for ScreenSink<T> {
    fn write(&mut self, buf: &[u8]) -> usize {
        for &byte in buf {
            self.screen.put_char(byte);
        }
        buf.len()
    }
}

/// Sink wrapping a serial port.
///
/// Bytes move one at a time over the configured port; the port I/O
/// primitive absorbs hardware readiness.
pub struct SerialSink<P: PortIo> {
    port: u16,
    io: P,
}

impl<P: PortIo> SerialSink<P> {
    pub fn new(port: u16, io: P) -> Self {
        Self { port, io }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Access to the underlying port I/O, mainly for tests
    pub fn io(&self) -> &P {
        &self.io
    }
}

impl<P: PortIo> DeviceSink for SerialSink<P> {
    fn write(&mut self, buf: &[u8]) -> usize {
        for &byte in buf {
            self.io.outb(self.port, byte);
        }
        buf.len()
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        for slot in buf.iter_mut() {
            *slot = self.io.inb(self.port);
        }
        buf.len()
    }
}

/// Sink that discards writes and produces no data.
///
/// Writes report full success so callers never treat the discard as a
/// short write.
#[derive(Debug, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceSink for NullSink {
    fn write(&mut self, buf: &[u8]) -> usize {
        buf.len()
    }
}
