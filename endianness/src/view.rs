//! Length-checked access.
//!
//! The accessors in [`crate::accessors`] and [`ByteCast`] trust the caller to
//! pass a long enough buffer. The types here check the length once, up front,
//! and report a short buffer as an [`Error`] instead of panicking.

use std::fmt;
use std::marker::PhantomData;

use crate::cast::ByteCast;
use crate::endian::Endian;
use crate::error::Error;
use crate::order::Order;

fn check_len<T: ByteCast>(actual: usize) -> Result<(), Error> {
    if actual < T::SIZEOF {
        log::trace!("rejected buffer of {} bytes; expected at least {}", actual, T::SIZEOF);
        Err(Error::BufferTooShort { expected: T::SIZEOF, actual })
    } else {
        Ok(())
    }
}

/// A read-only view of a buffer known to hold at least one `T`.
pub struct ByteView<'a, T: ByteCast> {
    bytes: &'a [u8],
    marker: PhantomData<T>,
}

impl<'a, T: ByteCast> ByteView<'a, T> {
    pub fn new(bytes: &'a [u8]) -> Result<Self, Error> {
        check_len::<T>(bytes.len())?;
        Ok(Self {
            bytes: &bytes[..T::SIZEOF],
            marker: PhantomData,
        })
    }

    #[inline(always)]
    pub fn read<O: Order>(&self) -> T {
        T::from_bytes::<O>(self.bytes)
    }

    #[inline]
    pub fn read_in(&self, endian: Endian) -> T {
        T::from_bytes_in(endian, self.bytes)
    }

    /// The `SIZEOF` bytes covered by this view.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a, T: ByteCast> Clone for ByteView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ByteCast> Copy for ByteView<'a, T> {}

impl<'a, T: ByteCast> fmt::Debug for ByteView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByteView").field(&self.bytes).finish()
    }
}

/// A mutable view of a buffer known to hold at least one `T`.
pub struct ByteViewMut<'a, T: ByteCast> {
    bytes: &'a mut [u8],
    marker: PhantomData<T>,
}

impl<'a, T: ByteCast> ByteViewMut<'a, T> {
    pub fn new(bytes: &'a mut [u8]) -> Result<Self, Error> {
        check_len::<T>(bytes.len())?;
        Ok(Self {
            bytes: &mut bytes[..T::SIZEOF],
            marker: PhantomData,
        })
    }

    #[inline(always)]
    pub fn read<O: Order>(&self) -> T {
        T::from_bytes::<O>(&self.bytes[..])
    }

    #[inline]
    pub fn read_in(&self, endian: Endian) -> T {
        T::from_bytes_in(endian, &self.bytes[..])
    }

    #[inline(always)]
    pub fn write<O: Order>(&mut self, value: T) {
        value.into_bytes::<O>(self.bytes)
    }

    #[inline]
    pub fn write_in(&mut self, endian: Endian, value: T) {
        value.into_bytes_in(endian, self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl<'a, T: ByteCast> fmt::Debug for ByteViewMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByteViewMut").field(&self.bytes).finish()
    }
}

/// Reads a `T` stored in order `O`, failing if `buf` is too short.
///
/// ```
/// use endianness::{try_read, Error, BE};
///
/// assert_eq!(try_read::<u16, BE>(&[0x12, 0x34]), Ok(0x1234));
/// assert_eq!(
///     try_read::<u32, BE>(&[0x12, 0x34]),
///     Err(Error::BufferTooShort { expected: 4, actual: 2 }),
/// );
/// ```
pub fn try_read<T: ByteCast, O: Order>(buf: &[u8]) -> Result<T, Error> {
    ByteView::<T>::new(buf).map(|view| view.read::<O>())
}

/// Writes `value` in order `O`, failing if `buf` is too short.
pub fn try_write<T: ByteCast, O: Order>(value: T, buf: &mut [u8]) -> Result<(), Error> {
    ByteViewMut::<T>::new(buf).map(|mut view| view.write::<O>(value))
}
