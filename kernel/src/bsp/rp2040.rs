// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Top-level BSP file for the Raspberry Pi Pico.

pub mod driver;
pub mod exception;
pub mod memory;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Nominal ring oscillator frequency.
///
/// The kernel never configures a clock source, so the cores and SysTick run from the ROSC at its
/// typical power-on rate. The real frequency drifts with part and temperature; tick arithmetic
/// depends on this value, wall-clock accuracy does not exist on this clock.
pub const ROSC_NOMINAL_HZ: u32 = 6_000_000;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Board identification.
pub fn board_name() -> &'static str {
    "Raspberry Pi Pico"
}
