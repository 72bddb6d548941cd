// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Synchronous and asynchronous exception handling.

#[cfg(target_arch = "arm")]
#[path = "_arch/armv6m/exception.rs"]
mod arch_exception;

pub mod asynchronous;

//--------------------------------------------------------------------------------------------------
// Architectural Public Reexports
//--------------------------------------------------------------------------------------------------
#[cfg(target_arch = "arm")]
pub use arch_exception::{current_privilege_level, exception_dispatch, handling_init};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Kernel privilege levels.
#[allow(missing_docs)]
#[derive(Eq, PartialEq)]
pub enum PrivilegeLevel {
    Privileged,
    Unprivileged,
}

/// A vector table entry.
///
/// Slots that have no exception wired on this core must read as the numeric value zero, so that
/// a fault probe can tell an idle slot from a stray code address. The union encodes a populated
/// entry as a handler address and a reserved entry as the zero word, with both occupying one
/// table word.
#[derive(Clone, Copy)]
pub union Vector {
    handler: unsafe extern "C" fn(),
    reserved: usize,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl Vector {
    /// Create an entry that points at a handler function.
    pub const fn handler(f: unsafe extern "C" fn()) -> Self {
        Self { handler: f }
    }

    /// Create a reserved entry. Encodes as the zero word.
    pub const fn reserved() -> Self {
        Self { reserved: 0 }
    }

    /// The raw table word.
    ///
    /// Reading the integer view of a handler entry is fine, since function pointers and `usize`
    /// have identical size and validity on this architecture.
    pub fn word(self) -> usize {
        unsafe { self.reserved }
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    extern "C" fn sample_handler() {}

    /// A reserved slot must encode as the zero word.
    #[test]
    fn reserved_vector_encodes_as_zero() {
        assert_eq!(Vector::reserved().word(), 0);
    }

    /// A populated slot must never encode as zero, or probing could not tell it apart from a
    /// reserved one.
    #[test]
    fn handler_vector_encodes_nonzero() {
        assert_ne!(Vector::handler(sample_handler).word(), 0);
    }

    /// An entry is exactly one table word wide.
    #[test]
    fn vector_is_one_word() {
        assert_eq!(
            core::mem::size_of::<Vector>(),
            core::mem::size_of::<usize>()
        );
    }
}
