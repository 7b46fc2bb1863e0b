//! Fan-out diagnostic output.
//!
//! Kernel messages are mirrored to up to two sinks, the console and
//! the serial port, so diagnostics survive whichever output happens to
//! be attached. This is the kernel's only log path; there is no
//! buffering between a message and the hardware.

use crate::registry::SharedSink;
use core::fmt;

/// Writer that mirrors every write to a console slot and a serial slot.
///
/// Either slot may be empty, and both are replaceable at runtime as
/// devices come up during boot. The slots hold shared handles, not
/// exclusive ownership; the same sinks stay reachable through the
/// device registry.
#[derive(Default)]
pub struct FanoutWriter {
    console: Option<SharedSink>,
    serial: Option<SharedSink>,
}

impl FanoutWriter {
    /// Creates a writer with both slots empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the console slot
    pub fn set_console(&mut self, sink: Option<SharedSink>) {
        self.console = sink;
    }

    /// Replaces the serial slot
    pub fn set_serial(&mut self, sink: Option<SharedSink>) {
        self.serial = sink;
    }

    /// Writes the buffer to every attached sink.
    ///
    /// With no sinks attached the bytes go nowhere and the count is
    /// zero. With one sink the result is exactly that sink's. With
    /// both, serial is written first and the returned count is the
    /// **minimum** of the two. Callers must never believe more was
    /// durably emitted than the slower sink accepted.
    pub fn write(&mut self, buf: &[u8]) -> usize {
        match (&self.serial, &self.console) {
            (None, None) => 0,
            (Some(serial), None) => serial.borrow_mut().write(buf),
            (None, Some(console)) => console.borrow_mut().write(buf),
            (Some(serial), Some(console)) => {
                let serial_written = serial.borrow_mut().write(buf);
                let console_written = console.borrow_mut().write(buf);
                serial_written.min(console_written)
            }
        }
    }
}

/// Formatted diagnostic output over a [`FanoutWriter`].
///
/// Diagnostics are best-effort: a sink that accepts fewer bytes than
/// offered loses the tail, and formatting never fails because of it.
pub struct DiagnosticWriter {
    output: FanoutWriter,
}

impl DiagnosticWriter {
    pub fn new(output: FanoutWriter) -> Self {
        Self { output }
    }

    /// The underlying fan-out writer, for swapping sinks at runtime
    pub fn output_mut(&mut self) -> &mut FanoutWriter {
        &mut self.output
    }

    /// Writes a newline-terminated diagnostic line
    pub fn write_line(&mut self, line: &str) {
        self.output.write(line.as_bytes());
        self.output.write(b"\n");
    }
}

impl fmt::Write for DiagnosticWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.output.write(s.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::share;
    use hal::FakeSink;
    use std::cell::RefCell;
    use std::fmt::Write as _;
    use std::rc::Rc;

    /// A fake sink kept inspectable: the typed handle stays with the
    /// test while the erased clone goes to the writer.
    fn inspectable(sink: FakeSink) -> (Rc<RefCell<FakeSink>>, SharedSink) {
        let typed = Rc::new(RefCell::new(sink));
        let erased: SharedSink = typed.clone();
        (typed, erased)
    }

    #[test]
    fn test_no_sinks_writes_nothing() {
        let mut fanout = FanoutWriter::new();
        assert_eq!(fanout.write(b"lost"), 0);
    }

    #[test]
    fn test_single_sink_delegation() {
        // With only one slot set, the result and side effects equal
        // calling the sink directly.
        let (console, erased) = inspectable(FakeSink::with_accept_limit(3));
        let mut fanout = FanoutWriter::new();
        fanout.set_console(Some(erased));

        assert_eq!(fanout.write(b"hello"), 3);
        assert_eq!(console.borrow().written(), b"hel");

        let (serial, erased) = inspectable(FakeSink::new());
        let mut fanout = FanoutWriter::new();
        fanout.set_serial(Some(erased));
        assert_eq!(fanout.write(b"hello"), 5);
        assert_eq!(serial.borrow().written(), b"hello");
    }

    #[test]
    fn test_both_sinks_return_minimum() {
        let serial = share(FakeSink::with_accept_limit(2));
        let console = share(FakeSink::new());
        let mut fanout = FanoutWriter::new();
        fanout.set_serial(Some(Rc::clone(&serial)));
        fanout.set_console(Some(Rc::clone(&console)));

        // Console took all 5, serial only 2; the caller learns 2.
        assert_eq!(fanout.write(b"panic"), 2);
    }

    #[test]
    fn test_both_sinks_receive_the_bytes() {
        // Keep typed handles so the captured bytes stay inspectable
        // after the writer takes its erased clones.
        let (serial, erased_serial) = inspectable(FakeSink::new());
        let (console, erased_console) = inspectable(FakeSink::new());

        let mut fanout = FanoutWriter::new();
        fanout.set_serial(Some(erased_serial));
        fanout.set_console(Some(erased_console));

        assert_eq!(fanout.write(b"mirrored"), 8);
        assert_eq!(serial.borrow().written(), b"mirrored");
        assert_eq!(console.borrow().written(), b"mirrored");
    }

    #[test]
    fn test_sinks_replaceable_at_runtime() {
        let first = share(FakeSink::with_accept_limit(1));
        let second = share(FakeSink::new());
        let mut fanout = FanoutWriter::new();

        fanout.set_console(Some(first));
        assert_eq!(fanout.write(b"ab"), 1);

        fanout.set_console(Some(second));
        assert_eq!(fanout.write(b"ab"), 2);

        fanout.set_console(None);
        assert_eq!(fanout.write(b"ab"), 0);
    }

    #[test]
    fn test_diagnostic_writer_formats_lines() {
        let (console, erased) = inspectable(FakeSink::new());
        let mut fanout = FanoutWriter::new();
        fanout.set_console(Some(erased));

        let mut diag = DiagnosticWriter::new(fanout);
        diag.write_line("boot: stage 2");
        write!(diag, "heap at {:#x}", 0x100000usize).unwrap();

        assert_eq!(
            console.borrow().written(),
            b"boot: stage 2\nheap at 0x100000"
        );
    }

    #[test]
    fn test_diagnostic_writer_sinks_swappable() {
        let (serial, erased) = inspectable(FakeSink::new());
        let mut diag = DiagnosticWriter::new(FanoutWriter::new());

        diag.write_line("dropped: no sink yet");
        diag.output_mut().set_serial(Some(erased));
        diag.write_line("attached");

        assert_eq!(serial.borrow().written(), b"attached\n");
    }
}
