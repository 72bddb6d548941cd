// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Boot code.

#[cfg(target_arch = "arm")]
#[path = "../_arch/armv6m/cpu/boot.rs"]
mod arch_boot;
