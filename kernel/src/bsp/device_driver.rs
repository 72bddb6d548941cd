// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Device driver.

mod arm;
pub mod common;

#[cfg(feature = "bsp_pico")]
mod rp2040;

pub use arm::*;

#[cfg(feature = "bsp_pico")]
pub use rp2040::*;
