// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Memory Management.

use core::{ops::Range, ptr};

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Zero out a memory region.
///
/// The range is end-exclusive. An empty range, `start == end`, writes nothing.
///
/// # Safety
///
/// - `range.start` and `range.end` must be valid.
/// - `range.start` and `range.end` must be `T` aligned.
pub unsafe fn zero_volatile<T>(range: Range<*mut T>)
where
    T: From<u8>,
{
    let mut ptr = range.start;

    while ptr < range.end {
        ptr::write_volatile(ptr, T::from(0));
        ptr = ptr.offset(1);
    }
}

/// Copy a memory region, element by element, from `src` upwards.
///
/// The destination range is end-exclusive and determines the copy length. An empty range,
/// `start == end`, copies nothing, and `src` is never read.
///
/// # Safety
///
/// - `range.start`, `range.end` and `src` must be valid.
/// - `range.start`, `range.end` and `src` must be `T` aligned.
/// - `src` must be readable for as many elements as the destination range holds.
pub unsafe fn copy_volatile<T>(range: Range<*mut T>, src: *const T)
where
    T: Copy,
{
    let mut ptr = range.start;
    let mut src = src;

    while ptr < range.end {
        ptr::write_volatile(ptr, ptr::read_volatile(src));
        ptr = ptr.offset(1);
        src = src.offset(1);
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Check `zero_volatile()`.
    #[test]
    fn zero_volatile_works() {
        let mut x: [usize; 3] = [10, 11, 12];
        let x_range = x.as_mut_ptr_range();

        unsafe { zero_volatile(x_range) };

        assert_eq!(x, [0, 0, 0]);
    }

    /// An empty range must leave the memory untouched.
    #[test]
    fn zero_volatile_empty_range_is_a_no_op() {
        let mut x: [usize; 3] = [10, 11, 12];
        let start = x.as_mut_ptr();

        unsafe { zero_volatile(start..start) };

        assert_eq!(x, [10, 11, 12]);
    }

    /// Check `copy_volatile()`.
    #[test]
    fn copy_volatile_works() {
        let src: [u32; 3] = [1, 2, 3];
        let mut dst: [u32; 3] = [0; 3];
        let dst_range = dst.as_mut_ptr_range();

        unsafe { copy_volatile(dst_range, src.as_ptr()) };

        assert_eq!(dst, [1, 2, 3]);
    }

    /// The destination range alone bounds the copy. Source elements beyond it stay unread.
    #[test]
    fn copy_volatile_respects_the_destination_bounds() {
        let src: [u32; 4] = [1, 2, 3, 4];
        let mut dst: [u32; 4] = [9, 9, 9, 42];
        let dst_range = dst[..3].as_mut_ptr_range();

        unsafe { copy_volatile(dst_range, src.as_ptr()) };

        assert_eq!(dst, [1, 2, 3, 42]);
    }

    /// An empty destination range must not read from the source pointer at all.
    #[test]
    fn copy_volatile_empty_range_is_a_no_op() {
        let mut dst: [u32; 2] = [7, 7];
        let start = dst.as_mut_ptr();

        unsafe { copy_volatile(start..start, core::ptr::null()) };

        assert_eq!(dst, [7, 7]);
    }

    /// Abutting source and destination regions copy the full element count.
    #[test]
    fn copy_volatile_works_for_abutting_regions() {
        let mut buf: [u32; 6] = [1, 2, 3, 0, 0, 0];
        let base = buf.as_mut_ptr();

        unsafe { copy_volatile(base.add(3)..base.add(6), base as *const u32) };

        assert_eq!(buf, [1, 2, 3, 1, 2, 3]);
    }
}
