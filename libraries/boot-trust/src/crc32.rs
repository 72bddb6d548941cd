// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Bit-reversed CRC-32.
//!
//! Generator polynomial 0x04C11DB7, processed in reflected form: input bytes enter the shift
//! register least significant bit first, and the remainder leaves it bit-reversed before the
//! final inversion. Initial value and final XOR are both 0xFFFFFFFF. This is the widely
//! deployed reflected CRC-32 whose check value over the ASCII bytes of `123456789` is
//! 0xCBF43926.

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

/// The generator polynomial 0x04C11DB7 in reflected form.
const POLY_REFLECTED: u32 = 0xEDB8_8320;

/// One precomputed remainder per byte value.
const TABLE: [u32; 256] = build_table();

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];

    let mut byte = 0;
    while byte < 256 {
        let mut rem = byte as u32;

        let mut bit = 0;
        while bit < 8 {
            rem = if rem & 1 != 0 {
                (rem >> 1) ^ POLY_REFLECTED
            } else {
                rem >> 1
            };
            bit += 1;
        }

        table[byte] = rem;
        byte += 1;
    }

    table
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Computes the checksum of `bytes`.
///
/// Pure and deterministic. The result depends on the input bytes alone, so build host and
/// target always agree on it.
pub const fn checksum(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFF_u32;

    let mut i = 0;
    while i < bytes.len() {
        let index = ((crc ^ bytes[i] as u32) & 0xFF) as usize;
        crc = (crc >> 8) ^ TABLE[index];
        i += 1;
    }

    crc ^ 0xFFFF_FFFF
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_reflected_crc32_check_value() {
        assert_eq!(checksum(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn empty_input_yields_zero() {
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn is_deterministic() {
        let payload = [0xA5_u8; 64];

        assert_eq!(checksum(&payload), checksum(&payload));
    }

    #[test]
    fn evaluates_in_const_context() {
        const CRC: u32 = checksum(&[0_u8; 8]);

        assert_eq!(CRC, checksum(&[0_u8; 8]));
    }
}
