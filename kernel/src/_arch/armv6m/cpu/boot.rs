// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Architectural boot code.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::cpu::boot::arch_boot

use crate::{exception, runtime_init};

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// The Rust entry of the `kernel` binary.
///
/// The hardware fetched the initial stack pointer from vector table slot 0 before this function
/// starts, so a full stack is available. Nothing else is: the `data` and `bss` sections are not
/// initialized yet and no static may be touched until `runtime_init()` has run.
///
/// # Safety
///
/// - Must only ever be entered through the reset vector.
#[no_mangle]
#[link_section = ".text._start"]
pub unsafe extern "C" fn _start() -> ! {
    // Interrupts stay masked until kernel_init() has registered all handlers.
    exception::asynchronous::local_irq_mask();

    runtime_init::runtime_init()
}

/// Vector table slot 1. The linker script places this word directly behind the initial stack
/// pointer word.
#[no_mangle]
#[link_section = ".vector_table.reset_vector"]
pub static __RESET_VECTOR: unsafe extern "C" fn() -> ! = _start;
