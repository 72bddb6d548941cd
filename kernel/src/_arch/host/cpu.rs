// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Host stand-ins for the architectural processor primitives.
//!
//! Driver poll loops insert a NOP per spin. On the host, where unit tests only exercise the
//! already-satisfied path of those loops, an empty function keeps them compiling.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::cpu::arch_cpu

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Insert a NOP instruction.
#[inline(always)]
pub fn nop() {}
