//! VGA text mode screen
//!
//! An 80x25 character screen backed by VGA text memory. Each cell is a
//! u16: low byte character, high byte attribute.

use core::ptr;
use hal::TextOutput;

/// VGA text mode dimensions
pub const VGA_WIDTH: usize = 80;
pub const VGA_HEIGHT: usize = 25;

/// Physical address of the VGA text buffer
pub const VGA_TEXT_BASE: usize = 0xB8000;

/// Light gray on black
const DEFAULT_ATTR: u8 = 0x07;

/// VGA text screen with cursor tracking and scrolling
///
/// Implements [`TextOutput`] so the screen sink can drive it. The
/// cursor advances per character, `\n` starts a new line, `\r` returns
/// to column zero, and writing past the last row scrolls the screen up
/// by one line.
pub struct VgaTextScreen {
    buffer: *mut u16,
    row: usize,
    col: usize,
    attr: u8,
}

impl VgaTextScreen {
    /// Creates a screen over the VGA buffer mapped at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point to a mapped, writable region of at least
    /// `VGA_WIDTH * VGA_HEIGHT` u16 cells for the lifetime of the
    /// screen, and nothing else may write it concurrently.
    pub unsafe fn new(base: usize) -> Self {
        Self {
            buffer: base as *mut u16,
            row: 0,
            col: 0,
            attr: DEFAULT_ATTR,
        }
    }

    /// Sets the attribute byte applied to subsequently written cells
    pub fn set_attr(&mut self, attr: u8) {
        self.attr = attr;
    }

    /// Clears the whole screen and homes the cursor
    pub fn clear(&mut self) {
        for row in 0..VGA_HEIGHT {
            self.clear_row(row);
        }
        self.row = 0;
        self.col = 0;
    }

    fn cell(&self, ch: u8) -> u16 {
        ((self.attr as u16) << 8) | ch as u16
    }

    fn clear_row(&mut self, row: usize) {
        let blank = self.cell(b' ');
        // SAFETY: row < VGA_HEIGHT, so every offset stays inside the
        // buffer the constructor was promised.
        unsafe {
            let line = self.buffer.add(row * VGA_WIDTH);
            for col in 0..VGA_WIDTH {
                ptr::write_volatile(line.add(col), blank);
            }
        }
    }

    fn newline(&mut self) {
        self.col = 0;
        if self.row + 1 == VGA_HEIGHT {
            self.scroll_up();
        } else {
            self.row += 1;
        }
    }

    fn scroll_up(&mut self) {
        // SAFETY: source and destination rows are both in bounds; the
        // regions are one full row apart so they do not overlap within
        // a single copy.
        unsafe {
            for row in 1..VGA_HEIGHT {
                let src = self.buffer.add(row * VGA_WIDTH);
                let dst = self.buffer.add((row - 1) * VGA_WIDTH);
                ptr::copy_nonoverlapping(src, dst, VGA_WIDTH);
            }
        }
        self.clear_row(VGA_HEIGHT - 1);
    }
}

impl TextOutput for VgaTextScreen {
    fn put_char(&mut self, ch: u8) {
        match ch {
            b'\n' => self.newline(),
            b'\r' => self.col = 0,
            _ => {
                let cell = self.cell(ch);
                // SAFETY: row/col are kept within screen bounds by the
                // advance logic below.
                unsafe {
                    let offset = self.row * VGA_WIDTH + self.col;
                    ptr::write_volatile(self.buffer.add(offset), cell);
                }
                self.col += 1;
                if self.col == VGA_WIDTH {
                    self.newline();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_over(buf: &mut Vec<u16>) -> VgaTextScreen {
        buf.resize(VGA_WIDTH * VGA_HEIGHT, 0);
        // SAFETY: the vector is sized to a full screen and outlives the
        // returned value within each test.
        unsafe { VgaTextScreen::new(buf.as_mut_ptr() as usize) }
    }

    fn char_at(buf: &[u16], row: usize, col: usize) -> u8 {
        (buf[row * VGA_WIDTH + col] & 0xFF) as u8
    }

    #[test]
    fn test_put_char_writes_cell_with_attr() {
        let mut buf = Vec::new();
        let mut screen = screen_over(&mut buf);
        screen.put_char(b'A');
        drop(screen);

        assert_eq!(buf[0], ((DEFAULT_ATTR as u16) << 8) | b'A' as u16);
    }

    #[test]
    fn test_newline_and_carriage_return() {
        let mut buf = Vec::new();
        let mut screen = screen_over(&mut buf);
        screen.put_char(b'a');
        screen.put_char(b'\n');
        screen.put_char(b'b');
        screen.put_char(b'\r');
        screen.put_char(b'c');
        drop(screen);

        assert_eq!(char_at(&buf, 0, 0), b'a');
        // 'c' overwrote 'b' after the carriage return.
        assert_eq!(char_at(&buf, 1, 0), b'c');
    }

    #[test]
    fn test_line_wrap_at_screen_width() {
        let mut buf = Vec::new();
        let mut screen = screen_over(&mut buf);
        for _ in 0..VGA_WIDTH {
            screen.put_char(b'x');
        }
        screen.put_char(b'y');
        drop(screen);

        assert_eq!(char_at(&buf, 0, VGA_WIDTH - 1), b'x');
        assert_eq!(char_at(&buf, 1, 0), b'y');
    }

    #[test]
    fn test_scroll_discards_top_line() {
        let mut buf = Vec::new();
        let mut screen = screen_over(&mut buf);

        for row in 0..VGA_HEIGHT {
            screen.put_char(b'0' + (row % 10) as u8);
            if row + 1 < VGA_HEIGHT {
                screen.put_char(b'\n');
            }
        }
        // Screen is full; this newline scrolls everything up one row.
        screen.put_char(b'\n');
        screen.put_char(b'Z');
        drop(screen);

        // Row 0 now holds what was row 1.
        assert_eq!(char_at(&buf, 0, 0), b'1');
        assert_eq!(char_at(&buf, VGA_HEIGHT - 1, 0), b'Z');
    }

    #[test]
    fn test_clear_blanks_screen() {
        let mut buf = Vec::new();
        let mut screen = screen_over(&mut buf);
        screen.put_char(b'q');
        screen.clear();
        drop(screen);
        assert_eq!(char_at(&buf, 0, 0), b' ');

        // A fresh screen over the same memory starts at the origin.
        let mut screen = screen_over(&mut buf);
        screen.put_char(b'r');
        drop(screen);
        assert_eq!(char_at(&buf, 0, 0), b'r');
    }
}
