// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Conditional reexporting of Board Support Packages.

mod device_driver;

#[cfg(feature = "bsp_pico")]
mod rp2040;

#[cfg(feature = "bsp_pico")]
pub use rp2040::*;
