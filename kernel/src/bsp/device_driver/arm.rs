// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! ARM core-local device drivers.

mod nvic;
mod systick;

pub use nvic::*;
pub use systick::*;
