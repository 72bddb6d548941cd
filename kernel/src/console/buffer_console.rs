// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! A console that sinks all output into a RAM buffer.
//!
//! The board has no serial device wired up, so this is the permanent console. The buffer lives
//! at a fixed location in `bss` and can be read out with a debugger at any time, including after
//! a panic.

use super::interface;
use crate::synchronization::{interface::Mutex, IRQSafeNullLock};
use core::fmt;

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

const BUF_SIZE: usize = 1024;

struct BufferConsoleInner {
    buf: [char; BUF_SIZE],
    write_ptr: usize,
    chars_lost: usize,
}

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

pub struct BufferConsole {
    inner: IRQSafeNullLock<BufferConsoleInner>,
}

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

pub static BUFFER_CONSOLE: BufferConsole = BufferConsole::new();

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

impl BufferConsoleInner {
    fn write_char(&mut self, c: char) {
        if self.write_ptr < BUF_SIZE {
            self.buf[self.write_ptr] = c;
            self.write_ptr += 1;
        } else {
            // Keep counting so an overflow is visible in the statistics.
            self.chars_lost += 1;
        }
    }
}

impl fmt::Write for BufferConsoleInner {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.write_char(c);
        }

        Ok(())
    }
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl BufferConsole {
    /// Create an instance.
    pub const fn new() -> Self {
        Self {
            inner: IRQSafeNullLock::new(BufferConsoleInner {
                // Use the null character, so this lands in .bss and does not waste space in the
                // binary.
                buf: ['\0'; BUF_SIZE],
                write_ptr: 0,
                chars_lost: 0,
            }),
        }
    }

    /// Run `f` against everything buffered so far.
    pub fn with_content<R>(&self, f: impl FnOnce(&[char]) -> R) -> R {
        self.inner.lock(|inner| f(&inner.buf[..inner.write_ptr]))
    }
}

impl interface::Write for BufferConsole {
    fn write_char(&self, c: char) {
        self.inner.lock(|inner| inner.write_char(c));
    }

    fn write_fmt(&self, args: fmt::Arguments) -> fmt::Result {
        self.inner.lock(|inner| fmt::Write::write_fmt(inner, args))
    }
}

impl interface::Statistics for BufferConsole {
    fn chars_written(&self) -> usize {
        self.inner.lock(|inner| inner.write_ptr)
    }

    fn chars_lost(&self) -> usize {
        self.inner.lock(|inner| inner.chars_lost)
    }
}

impl interface::All for BufferConsole {}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use interface::{Statistics, Write};

    /// Formatted writes land in the buffer verbatim.
    #[test]
    fn formatted_output_is_buffered() {
        let console = BufferConsole::new();

        console.write_fmt(format_args!("tick {}", 500)).unwrap();

        console.with_content(|content| {
            assert_eq!(content.iter().collect::<String>(), "tick 500");
        });
        assert_eq!(console.chars_written(), 8);
        assert_eq!(console.chars_lost(), 0);
    }

    /// Overflowing the buffer drops characters but keeps counting them.
    #[test]
    fn overflow_is_recorded_not_grown() {
        let console = BufferConsole::new();

        for _ in 0..(BUF_SIZE + 10) {
            console.write_char('x');
        }

        assert_eq!(console.chars_written(), BUF_SIZE);
        assert_eq!(console.chars_lost(), 10);
    }
}
