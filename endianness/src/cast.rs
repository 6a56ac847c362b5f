use crate::copy::{copy_in_order, copy_ordered};
use crate::endian::Endian;
use crate::index::Addressing;
use crate::order::Order;

/// A fixed-width value that can be moved to and from bytes in either order.
///
/// `buf` must hold at least `SIZEOF` bytes; only the first `SIZEOF` are
/// touched.
pub trait ByteCast: Copy {
    const SIZEOF: usize;
    const SIGNED: bool;

    /// The value's native in-memory representation.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn from_ne_array(bytes: Self::Bytes) -> Self;
    fn into_ne_array(self) -> Self::Bytes;

    #[inline(always)]
    fn from_bytes<O: Order>(buf: &[u8]) -> Self {
        let mut bytes = <Self::Bytes as Default>::default();
        copy_ordered::<O>(buf, bytes.as_mut(), Self::SIZEOF);
        Self::from_ne_array(bytes)
    }

    #[inline(always)]
    fn into_bytes<O: Order>(&self, buf: &mut [u8]) {
        copy_ordered::<O>(self.into_ne_array().as_ref(), buf, Self::SIZEOF)
    }

    #[inline]
    fn from_bytes_in(endian: Endian, buf: &[u8]) -> Self {
        let mut bytes = <Self::Bytes as Default>::default();
        copy_in_order(buf, bytes.as_mut(), Self::SIZEOF, endian);
        Self::from_ne_array(bytes)
    }

    #[inline]
    fn into_bytes_in(&self, endian: Endian, buf: &mut [u8]) {
        copy_in_order(self.into_ne_array().as_ref(), buf, Self::SIZEOF, endian)
    }

    /// Reads one byte of the native representation, addressed with `mode`.
    ///
    /// ```
    /// use endianness::{Addressing, ByteCast};
    ///
    /// assert_eq!(0x1234u16.native_byte(Addressing::HB, 0), 0x12);
    /// assert_eq!(0x1234u16.native_byte(Addressing::LB, 0), 0x34);
    /// ```
    ///
    /// # Panics
    ///
    /// If `index` is not less than `SIZEOF`. Debug builds stop at the index
    /// assertion; release builds at the out-of-range slice access.
    #[inline]
    fn native_byte(&self, mode: Addressing, index: usize) -> u8 {
        self.into_ne_array().as_ref()[mode.offset(Self::SIZEOF, index)]
    }
}

macro_rules! impl_for {
    ($t:ident, $signed:ident) => {
        impl ByteCast for $t {
            const SIZEOF: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = $signed;

            type Bytes = [u8; std::mem::size_of::<$t>()];

            #[inline(always)]
            fn from_ne_array(bytes: Self::Bytes) -> Self {
                $t::from_ne_bytes(bytes)
            }

            #[inline(always)]
            fn into_ne_array(self) -> Self::Bytes {
                self.to_ne_bytes()
            }
        }
    };
}

macro_rules! impls_for {
    ([$($tname:ident),*], $signed:ident) => {
        $(
            impl_for!($tname, $signed);
        )*
    };
}

impls_for! { [i8, i16, i32, i64, f32, f64], true }
impls_for! { [u8, u16, u32, u64], false }
