// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! BSP Memory Management.
//!
//! The physical memory layout as the kernel sees it after the second-stage handoff:
//!
//! +---------------------------------------+
//! |                                       | 0x1000_0000 (XIP flash window)
//! | Sealed second-stage image             |
//! |   256 byte payload + 4 byte trailer,  |
//! |   region padded to 512 bytes          |
//! +---------------------------------------+
//! |                                       | 0x1000_0200
//! | Vector table                          |
//! |   slot 0: initial stack pointer       |
//! |   slot 1: reset, points at _start()   |
//! |   then exceptions and NVIC lines      |
//! +---------------------------------------+
//! | .text                                 |
//! | .rodata                               |
//! | .data load image                      |
//! +---------------------------------------+
//!
//! +---------------------------------------+
//! |                                       | 0x2000_0000 (SRAM)
//! | .data                                 |
//! | .bss                                  |
//! +---------------------------------------+
//! | Stack, growing downwards              |
//! |                                       | 0x2004_2000 (initial stack pointer)
//! +---------------------------------------+

#[cfg(target_os = "none")]
use core::{cell::UnsafeCell, ops::Range};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

// Symbols from the linker script.
#[cfg(target_os = "none")]
extern "Rust" {
    static __data_load_start: UnsafeCell<u32>;
    static __data_start: UnsafeCell<u32>;
    static __data_end_exclusive: UnsafeCell<u32>;
    static __bss_start: UnsafeCell<u32>;
    static __bss_end_exclusive: UnsafeCell<u32>;
}

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// The board's physical memory map.
#[rustfmt::skip]
pub mod map {
    /// Start of the execute-in-place flash window.
    pub const XIP_START:          usize = 0x1000_0000;

    /// The vector table sits directly behind the sealed boot region.
    pub const VECTOR_TABLE_START: usize = XIP_START + boot_trust::image::VECTOR_TABLE_OFFSET;

    /// Physical devices.
    pub mod mmio {
        /// Reset controller.
        pub const RESETS_START:     usize = 0x4000_C000;

        /// Atomic bit-clear alias of the reset controller.
        pub const RESETS_CLR_START: usize = RESETS_START + 0x3000;

        /// User GPIO bank.
        pub const IO_BANK0_START:   usize = 0x4001_4000;

        /// Single-cycle IO block.
        pub const SIO_START:        usize = 0xD000_0000;

        /// Cortex-M0+ private peripheral bus.
        pub const PPB_START:        usize = 0xE000_0000;

        /// SysTick timer.
        pub const SYSTICK_START:    usize = PPB_START + 0xE010;

        /// Interrupt controller.
        pub const NVIC_START:       usize = PPB_START + 0xE100;
    }
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Exclusive range of the .data section in RAM.
///
/// An empty range is legal and means there is no initialized data to copy.
///
/// # Safety
///
/// - Values are provided by the linker script and must be trusted as-is.
#[cfg(target_os = "none")]
#[inline(always)]
pub fn data_range() -> Range<*mut u32> {
    unsafe {
        Range {
            start: __data_start.get(),
            end: __data_end_exclusive.get(),
        }
    }
}

/// Start of the .data load image in flash.
///
/// # Safety
///
/// - Value is provided by the linker script and must be trusted as-is.
#[cfg(target_os = "none")]
#[inline(always)]
pub fn data_load_start() -> *const u32 {
    unsafe { __data_load_start.get() as *const u32 }
}

/// Exclusive range of the .bss section.
///
/// An empty range is legal and means there are no zero-initialized statics.
///
/// # Safety
///
/// - Values are provided by the linker script and must be trusted as-is.
#[cfg(target_os = "none")]
#[inline(always)]
pub fn bss_range() -> Range<*mut u32> {
    unsafe {
        Range {
            start: __bss_start.get(),
            end: __bss_end_exclusive.get(),
        }
    }
}
