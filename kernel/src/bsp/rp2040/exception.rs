// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! BSP exception handling.

pub mod asynchronous;

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

/// The RP2040's NVIC vector entries, exception numbers 16 through 41.
///
/// Every line funnels through the shared dispatch routine; which handler actually runs is decided
/// by the NVIC driver's registry. The chip wires up exactly 26 lines, so there is nothing to pad.
#[cfg(target_arch = "arm")]
#[no_mangle]
#[link_section = ".vector_table.interrupts"]
pub static __INTERRUPTS: [crate::exception::Vector; 26] =
    [crate::exception::Vector::handler(crate::exception::exception_dispatch); 26];
