// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Architectural asynchronous exception handling.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::exception::asynchronous::arch_asynchronous

use cortex_m::{interrupt, register::primask};

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Returns whether IRQs are masked on the executing core.
///
/// ARMv6-M has a single maskable class, so PRIMASK is the whole story.
pub fn is_local_irq_masked() -> bool {
    primask::read().is_active()
}

/// Unmask IRQs on the executing core.
#[inline(always)]
pub fn local_irq_unmask() {
    unsafe { interrupt::enable() }
}

/// Mask IRQs on the executing core.
#[inline(always)]
pub fn local_irq_mask() {
    interrupt::disable()
}

/// Mask IRQs on the executing core and return the previously saved interrupt mask bits.
#[inline(always)]
pub fn local_irq_mask_save() -> u32 {
    let saved = primask::read().is_active() as u32;
    local_irq_mask();

    saved
}

/// Restore the interrupt mask bits that were returned by `local_irq_mask_save`.
#[inline(always)]
pub fn local_irq_restore(saved: u32) {
    if saved == 0 {
        local_irq_unmask();
    }
}

/// Print the exception mask status.
#[rustfmt::skip]
pub fn print_state() {
    use crate::info;

    let to_mask_str = |x| -> _ {
        if x { "Masked" } else { "Unmasked" }
    };

    info!("      PRIMASK: {}", to_mask_str(is_local_irq_masked()));
}
