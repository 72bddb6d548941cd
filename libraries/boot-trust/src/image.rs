// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! The sealed second-stage boot image and its flash layout.
//!
//! Execution out of flash starts in a fixed window. The first [`REGION_LEN`] bytes of that
//! window form the boot region: a [`PAYLOAD_LEN`] byte payload followed by a [`TRAILER_LEN`]
//! byte checksum trailer, with padding up to the region boundary. The vector table sits at
//! [`VECTOR_TABLE_OFFSET`], directly behind the region.
//!
//! The boot ROM only transfers control to a payload whose trailer matches the checksum of
//! the bytes in front of it. Sealing therefore is a mandatory build step, and verification
//! doubles as an integrity check for images that are already built.

use crate::crc32;
use core::fmt;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Payload size fixed by the boot ROM contract.
pub const PAYLOAD_LEN: usize = 256;

/// Checksum trailer size.
pub const TRAILER_LEN: usize = 4;

/// Size of a sealed image.
pub const SEALED_LEN: usize = PAYLOAD_LEN + TRAILER_LEN;

/// Size of the flash region owned by the boot image, sealed image plus padding.
pub const REGION_LEN: usize = 512;

/// Offset of the vector table from the start of the flash window.
pub const VECTOR_TABLE_OFFSET: usize = REGION_LEN;

/// Errors of the sealing and verification operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SealError {
    /// The payload input is not exactly [`PAYLOAD_LEN`] bytes. Carries the actual length.
    ///
    /// Never padded or truncated. A payload of the wrong size is a build error.
    WrongPayloadLength(usize),

    /// The image input is not exactly [`SEALED_LEN`] bytes. Carries the actual length.
    WrongImageLength(usize),

    /// The trailer does not match the checksum of the payload bytes.
    TrailerMismatch { expected: u32, found: u32 },
}

/// A second-stage payload. The contained machine code is opaque at this level.
#[derive(Clone)]
pub struct Payload([u8; PAYLOAD_LEN]);

/// A payload with its checksum trailer attached.
#[repr(C)]
#[derive(Clone)]
pub struct SealedImage {
    payload: [u8; PAYLOAD_LEN],
    trailer: [u8; TRAILER_LEN],
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl fmt::Display for SealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SealError::WrongPayloadLength(len) => write!(
                f,
                "payload must be exactly {} bytes, got {}",
                PAYLOAD_LEN, len
            ),
            SealError::WrongImageLength(len) => write!(
                f,
                "sealed image must be exactly {} bytes, got {}",
                SEALED_LEN, len
            ),
            SealError::TrailerMismatch { expected, found } => write!(
                f,
                "checksum trailer mismatch: expected {:#010x}, found {:#010x}",
                expected, found
            ),
        }
    }
}

impl Payload {
    /// Create an instance from an exactly sized array.
    pub const fn new(bytes: [u8; PAYLOAD_LEN]) -> Self {
        Self(bytes)
    }

    /// Create an instance from a slice, rejecting any length other than [`PAYLOAD_LEN`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SealError> {
        let sized: &[u8; PAYLOAD_LEN] = bytes
            .try_into()
            .map_err(|_| SealError::WrongPayloadLength(bytes.len()))?;

        Ok(Self(*sized))
    }

    /// Returns the payload bytes.
    pub const fn as_bytes(&self) -> &[u8; PAYLOAD_LEN] {
        &self.0
    }
}

impl SealedImage {
    /// Seals `payload` by appending its checksum, least significant byte first.
    pub const fn seal(payload: &Payload) -> Self {
        let crc = crc32::checksum(payload.as_bytes());

        Self {
            payload: *payload.as_bytes(),
            trailer: crc.to_le_bytes(),
        }
    }

    /// Returns the checksum stored in the trailer.
    pub const fn checksum(&self) -> u32 {
        u32::from_le_bytes(self.trailer)
    }

    /// Returns the sealed image bytes, payload first, trailer last.
    pub fn as_bytes(&self) -> &[u8; SEALED_LEN] {
        // repr(C) over two byte arrays, so the struct is exactly SEALED_LEN bytes, align 1.
        unsafe { &*(self as *const Self as *const [u8; SEALED_LEN]) }
    }
}

/// Verifies a sealed image by recomputing the payload checksum and comparing the trailer.
pub fn verify(bytes: &[u8; SEALED_LEN]) -> Result<(), SealError> {
    let (payload, trailer) = bytes.split_at(PAYLOAD_LEN);

    let expected = crc32::checksum(payload);
    let found = u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);

    if expected != found {
        return Err(SealError::TrailerMismatch { expected, found });
    }

    Ok(())
}

/// Slice-input variant of [`verify`], rejecting any length other than [`SEALED_LEN`].
pub fn verify_slice(bytes: &[u8]) -> Result<(), SealError> {
    let sized: &[u8; SEALED_LEN] = bytes
        .try_into()
        .map_err(|_| SealError::WrongImageLength(bytes.len()))?;

    verify(sized)
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_payload_golden_checksum() {
        let image = SealedImage::seal(&Payload::new([0_u8; PAYLOAD_LEN]));

        assert_eq!(image.checksum(), 0x0D96_8558);
    }

    #[test]
    fn trailer_is_stored_least_significant_byte_first() {
        let image = SealedImage::seal(&Payload::new([0_u8; PAYLOAD_LEN]));
        let bytes = image.as_bytes();

        assert_eq!(
            &bytes[PAYLOAD_LEN..],
            &[0x58, 0x85, 0x96, 0x0D],
            "trailer byte order"
        );
    }

    #[test]
    fn further_golden_checksums() {
        assert_eq!(
            SealedImage::seal(&Payload::new([0xFF_u8; PAYLOAD_LEN])).checksum(),
            0xFEA8_A821
        );

        let mut ascending = [0_u8; PAYLOAD_LEN];
        for (i, byte) in ascending.iter_mut().enumerate() {
            *byte = i as u8;
        }
        assert_eq!(
            SealedImage::seal(&Payload::new(ascending)).checksum(),
            0x2905_8C73
        );
    }

    #[test]
    fn seal_evaluates_in_const_context() {
        const IMAGE: SealedImage = SealedImage::seal(&Payload::new([0_u8; PAYLOAD_LEN]));

        assert_eq!(IMAGE.checksum(), 0x0D96_8558);
    }

    #[test]
    fn sealed_image_verifies() {
        let image = SealedImage::seal(&Payload::new([0x5A_u8; PAYLOAD_LEN]));

        assert_eq!(verify(image.as_bytes()), Ok(()));
    }

    #[test]
    fn any_single_bit_flip_fails_verification() {
        let image = SealedImage::seal(&Payload::new([0_u8; PAYLOAD_LEN]));
        let pristine = *image.as_bytes();

        for byte in 0..SEALED_LEN {
            for bit in 0..8 {
                let mut corrupt = pristine;
                corrupt[byte] ^= 1 << bit;

                assert!(
                    verify(&corrupt).is_err(),
                    "flip of byte {} bit {} went undetected",
                    byte,
                    bit
                );
            }
        }
    }

    #[test]
    fn payload_length_is_enforced() {
        assert_eq!(
            Payload::from_slice(&[0_u8; 255]).map(|_| ()),
            Err(SealError::WrongPayloadLength(255))
        );

        assert_eq!(
            Payload::from_slice(&[0_u8; 300]).map(|_| ()),
            Err(SealError::WrongPayloadLength(300))
        );

        assert!(Payload::from_slice(&[0_u8; PAYLOAD_LEN]).is_ok());
    }

    #[test]
    fn image_length_is_enforced() {
        assert_eq!(
            verify_slice(&[0_u8; PAYLOAD_LEN]),
            Err(SealError::WrongImageLength(PAYLOAD_LEN))
        );
    }
}
