// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Rust runtime initialization code.

use crate::{bsp, memory};

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

/// Init the `data` section from its load image in flash.
///
/// # Safety
///
/// - Must only be called pre `kernel_init()`.
#[inline(always)]
unsafe fn init_data() {
    memory::copy_volatile(bsp::memory::data_range(), bsp::memory::data_load_start());
}

/// Zero out the `bss` section.
///
/// # Safety
///
/// - Must only be called pre `kernel_init()`.
#[inline(always)]
unsafe fn zero_bss() {
    memory::zero_volatile(bsp::memory::bss_range());
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Equivalent to `crt0` or `c0` code in C/C++ world. Initializes the `data` section, clears the
/// `bss` section, then jumps to kernel init code.
///
/// Until both section loops are done, no static may be read or written. The loops themselves
/// only go through the linker-provided section bounds, so they depend on nothing that they set
/// up.
///
/// # Safety
///
/// - Only a single core must be active and running this function.
pub unsafe fn runtime_init() -> ! {
    extern "Rust" {
        fn kernel_init() -> !;
    }

    init_data();
    zero_bss();

    kernel_init()
}
