// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Processor code.

#[cfg(target_arch = "arm")]
#[path = "_arch/armv6m/cpu.rs"]
mod arch_cpu;

#[cfg(not(target_arch = "arm"))]
#[path = "_arch/host/cpu.rs"]
mod arch_cpu;

mod boot;

//--------------------------------------------------------------------------------------------------
// Architectural Public Reexports
//--------------------------------------------------------------------------------------------------
pub use arch_cpu::nop;

#[cfg(target_arch = "arm")]
pub use arch_cpu::{wait_for_interrupt, wait_forever};
