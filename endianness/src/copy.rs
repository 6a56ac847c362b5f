//! Byte-order aware copies.
//!
//! Copying into the host's own byte order is a plain `memcpy`; copying into the
//! opposite order reverses the bytes. The same rule serves both directions: a
//! native value copied out with `copy_in_order(.., order)` lands in `order`, and
//! a buffer in `order` copied in the same way yields the native value.

use crate::endian::Endian;
use crate::order::Order;

/// Copies `length` bytes from `src` into `dst` in reverse order.
///
/// # Panics
///
/// If `length` exceeds the length of either buffer.
#[inline]
pub fn copy_swapped(src: &[u8], dst: &mut [u8], length: usize) {
    debug_assert!(
        length <= src.len() && length <= dst.len(),
        "copy of {} bytes between buffers of {} and {} bytes",
        length,
        src.len(),
        dst.len(),
    );

    for (d, s) in dst[..length].iter_mut().zip(src[..length].iter().rev()) {
        *d = *s;
    }
}

#[inline]
fn copy_straight(src: &[u8], dst: &mut [u8], length: usize) {
    debug_assert!(
        length <= src.len() && length <= dst.len(),
        "copy of {} bytes between buffers of {} and {} bytes",
        length,
        src.len(),
        dst.len(),
    );

    dst[..length].copy_from_slice(&src[..length]);
}

/// Copies `length` bytes from `src` into `dst` so that `dst` holds them in
/// `target` order.
///
/// # Panics
///
/// If `length` exceeds the length of either buffer.
#[inline]
pub fn copy_in_order(src: &[u8], dst: &mut [u8], length: usize, target: Endian) {
    if target.is_native() {
        copy_straight(src, dst, length)
    } else {
        copy_swapped(src, dst, length)
    }
}

/// As [`copy_in_order`], with the target order fixed by a marker type.
#[inline(always)]
pub fn copy_ordered<O: Order>(src: &[u8], dst: &mut [u8], length: usize) {
    if O::NATIVE {
        copy_straight(src, dst, length)
    } else {
        copy_swapped(src, dst, length)
    }
}

#[inline(always)]
pub fn copy_be(src: &[u8], dst: &mut [u8], length: usize) {
    copy_in_order(src, dst, length, Endian::Big)
}

#[inline(always)]
pub fn copy_le(src: &[u8], dst: &mut [u8], length: usize) {
    copy_in_order(src, dst, length, Endian::Little)
}
