// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Architectural processor code.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::cpu::arch_cpu

use cortex_m::asm;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Insert a NOP instruction.
#[inline(always)]
pub fn nop() {
    asm::nop();
}

/// Put the core to sleep until the next interrupt arrives.
///
/// Wake-up is a hint only. The core may also resume for implementation defined reasons, so
/// callers must re-check their wake-up condition after returning.
#[inline(always)]
pub fn wait_for_interrupt() {
    asm::wfi();
}

/// Pause execution on the core.
#[inline(always)]
pub fn wait_forever() -> ! {
    loop {
        asm::wfi();
    }
}
