// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! RP2040 SoC drivers.

mod rp2040_gpio;
mod rp2040_resets;

pub use rp2040_gpio::*;
pub use rp2040_resets::*;
