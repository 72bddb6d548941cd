// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Host stand-ins for the architectural interrupt mask primitives.
//!
//! Unit tests build the kernel library for the host, where there is no PRIMASK to drive. Masking
//! is meaningless there, but the synchronization primitives still go through the same call
//! shapes, so these keep them compiling.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::exception::asynchronous::arch_asynchronous

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Returns whether IRQs are masked on the executing core.
pub fn is_local_irq_masked() -> bool {
    false
}

/// Unmask IRQs on the executing core.
#[inline(always)]
pub fn local_irq_unmask() {}

/// Mask IRQs on the executing core.
#[inline(always)]
pub fn local_irq_mask() {}

/// Mask IRQs on the executing core and return the previously saved interrupt mask bits.
#[inline(always)]
pub fn local_irq_mask_save() -> u32 {
    0
}

/// Restore the interrupt mask bits that were returned by `local_irq_mask_save`.
#[inline(always)]
pub fn local_irq_restore(_saved: u32) {}

/// Print the exception mask status.
pub fn print_state() {}
