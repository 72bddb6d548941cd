// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Printing.

use crate::console;
use core::fmt;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    console::console().write_fmt(args).unwrap();
}

/// Prints without a newline.
///
/// Carbon copy from <https://doc.rust-lang.org/src/std/macros.rs.html>
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::print::_print(format_args!($($arg)*)));
}

/// Prints with a newline.
///
/// Carbon copy from <https://doc.rust-lang.org/src/std/macros.rs.html>
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($string:expr) => ({
        $crate::print::_print(format_args!(concat!($string, "\n")));
    });
    ($format_string:expr, $($arg:tt)*) => ({
        $crate::print::_print(format_args!(concat!($format_string, "\n"), $($arg)*));
    })
}

/// Prints an info, with a newline.
#[macro_export]
macro_rules! info {
    ($string:expr) => ({
        let timestamp = $crate::time::tick_manager().uptime();

        $crate::print::_print(format_args!(
            concat!("[  {:>3}.{:06}] ", $string, "\n"),
            timestamp.as_secs(),
            timestamp.subsec_micros(),
        ));
    });
    ($format_string:expr, $($arg:tt)*) => ({
        let timestamp = $crate::time::tick_manager().uptime();

        $crate::print::_print(format_args!(
            concat!("[  {:>3}.{:06}] ", $format_string, "\n"),
            timestamp.as_secs(),
            timestamp.subsec_micros(),
            $($arg)*
        ));
    })
}

/// Prints a warning, with a newline.
#[macro_export]
macro_rules! warn {
    ($string:expr) => ({
        let timestamp = $crate::time::tick_manager().uptime();

        $crate::print::_print(format_args!(
            concat!("[W {:>3}.{:06}] ", $string, "\n"),
            timestamp.as_secs(),
            timestamp.subsec_micros(),
        ));
    });
    ($format_string:expr, $($arg:tt)*) => ({
        let timestamp = $crate::time::tick_manager().uptime();

        $crate::print::_print(format_args!(
            concat!("[W {:>3}.{:06}] ", $format_string, "\n"),
            timestamp.as_secs(),
            timestamp.subsec_micros(),
            $($arg)*
        ));
    })
}
