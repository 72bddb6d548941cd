// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Trust primitives for the second-stage boot image.
//!
//! The boot ROM refuses to run flash contents unless a checksum trailer matches the payload in
//! front of it. This crate implements that contract: the checksum itself ([`crc32`]) and the
//! sealed image layout around it ([`image`]). Everything is `const`-capable and free of
//! dependencies so both the firmware and the host-side sealing tool can use it.

#![cfg_attr(not(test), no_std)]

pub mod crc32;
pub mod image;
