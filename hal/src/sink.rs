//! Device sink abstraction
//!
//! A sink is a destination capable of accepting a byte stream and
//! optionally producing one, standing in for a concrete device.

/// Byte-stream capability implemented by device endpoints
///
/// Every call is synchronous and immediate; there is no buffering or
/// batching at this layer. Failures are never raised as errors: a sink
/// that cannot accept all bytes reports the shortfall through the
/// returned count, preserving the non-unwinding contract required in
/// interrupt context.
pub trait DeviceSink {
    /// Writes the buffer to the device, returning the number of bytes
    /// durably accepted.
    fn write(&mut self, buf: &[u8]) -> usize;

    /// Reads bytes from the device into the buffer, returning the
    /// number of bytes produced.
    ///
    /// Sinks without an input stream report zero.
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let _ = buf;
        0
    }
}

/// Fake sink for testing
///
/// Captures written bytes for inspection, optionally accepting at most
/// a configured number of bytes per write call, and produces scripted
/// bytes on read.
#[derive(Debug, Default)]
pub struct FakeSink {
    accept_limit: Option<usize>,
    written: Vec<u8>,
    read_script: Vec<u8>,
    read_index: usize,
}

impl FakeSink {
    /// Creates a fake sink that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fake sink that accepts at most `limit` bytes per write
    pub fn with_accept_limit(limit: usize) -> Self {
        Self {
            accept_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Queues bytes to be produced by subsequent reads
    pub fn feed(&mut self, bytes: &[u8]) {
        self.read_script.extend_from_slice(bytes);
    }

    /// Returns all bytes captured so far
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Clears the captured bytes
    pub fn clear_written(&mut self) {
        self.written.clear();
    }
}

impl DeviceSink for FakeSink {
    fn write(&mut self, buf: &[u8]) -> usize {
        let accepted = match self.accept_limit {
            Some(limit) => buf.len().min(limit),
            None => buf.len(),
        };
        self.written.extend_from_slice(&buf[..accepted]);
        accepted
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        let available = self.read_script.len() - self.read_index;
        let produced = buf.len().min(available);
        buf[..produced]
            .copy_from_slice(&self.read_script[self.read_index..self.read_index + produced]);
        self.read_index += produced;
        produced
    }
}
