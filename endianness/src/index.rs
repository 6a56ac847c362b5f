//! Logical byte addressing within a multi-byte value.
//!
//! `index_be` and `index_le` give the same offset on every host and are meant
//! for addressing serialised buffers. `index_hb` and `index_lb` address the
//! native in-memory representation of a value, so that index 0 under `HB` is
//! always the most-significant byte, wherever the code runs:
//!
//! ```
//! use endianness::{index_hb, index_lb};
//!
//! let value = 0x1234u16;
//! let bytes = value.to_ne_bytes();
//!
//! assert_eq!(bytes[index_hb(bytes.len(), 0)], 0x12);
//! assert_eq!(bytes[index_lb(bytes.len(), 0)], 0x34);
//! ```

use crate::cast::ByteCast;
use crate::endian::IS_BIG_ENDIAN;
use crate::error::Error;

#[inline(always)]
pub const fn inverse_index(total_size: usize, index: usize) -> usize {
    debug_assert!(index < total_size);
    total_size - index - 1
}

/// Offset of the `index`th byte counting from the most-significant byte of a
/// big-endian buffer.
#[inline(always)]
pub const fn index_be(total_size: usize, index: usize) -> usize {
    debug_assert!(index < total_size);
    index
}

/// Offset of the `index`th byte counting from the least-significant byte of a
/// little-endian buffer.
#[inline(always)]
pub const fn index_le(total_size: usize, index: usize) -> usize {
    inverse_index(total_size, index)
}

/// Offset of the `index`th byte counting down from the high byte of a native
/// value.
#[inline(always)]
pub const fn index_hb(total_size: usize, index: usize) -> usize {
    if IS_BIG_ENDIAN {
        index_be(total_size, index)
    } else {
        index_le(total_size, index)
    }
}

/// Offset of the `index`th byte counting up from the low byte of a native
/// value.
#[inline(always)]
pub const fn index_lb(total_size: usize, index: usize) -> usize {
    if IS_BIG_ENDIAN {
        index_le(total_size, index)
    } else {
        index_be(total_size, index)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Addressing {
    /// Big-endian buffer order.
    BE,
    /// Little-endian buffer order.
    LE,
    /// Native value, high byte first.
    HB,
    /// Native value, low byte first.
    LB,
}

impl Addressing {
    #[inline(always)]
    pub const fn offset(&self, total_size: usize, index: usize) -> usize {
        match self {
            Self::BE => index_be(total_size, index),
            Self::LE => index_le(total_size, index),
            Self::HB => index_hb(total_size, index),
            Self::LB => index_lb(total_size, index),
        }
    }

    /// The host-independent mode that yields the same offsets as `self` on
    /// this target.
    pub const fn resolve(&self) -> Self {
        match self {
            Self::BE | Self::LE => *self,
            Self::HB => if IS_BIG_ENDIAN { Self::BE } else { Self::LE },
            Self::LB => if IS_BIG_ENDIAN { Self::LE } else { Self::BE },
        }
    }
}

/// A logical byte index known to be in range for a value of `size` bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ByteIndex {
    size: usize,
    index: usize,
}

impl ByteIndex {
    pub fn new(size: usize, index: usize) -> Result<Self, Error> {
        if index >= size {
            log::trace!("rejected byte index {} for a {} byte value", index, size);
            return Err(Error::IndexOutOfRange { index, size });
        }
        Ok(Self { size, index })
    }

    pub fn of<T: ByteCast>(index: usize) -> Result<Self, Error> {
        Self::new(T::SIZEOF, index)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn index(&self) -> usize {
        self.index
    }

    #[inline(always)]
    pub fn offset(&self, mode: Addressing) -> usize {
        mode.offset(self.size, self.index)
    }

    pub fn be(&self) -> usize {
        self.offset(Addressing::BE)
    }

    pub fn le(&self) -> usize {
        self.offset(Addressing::LE)
    }

    pub fn hb(&self) -> usize {
        self.offset(Addressing::HB)
    }

    pub fn lb(&self) -> usize {
        self.offset(Addressing::LB)
    }
}
