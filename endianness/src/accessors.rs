//! Named big- and little-endian accessors.
//!
//! Every `read_*` function interprets the first `size_of::<T>()` bytes of its
//! buffer, and every `write_*` function overwrites exactly that many. Shorter
//! buffers panic.

/// Generates `read_<name>_be`, `read_<name>_le`, `write_<name>_be` and
/// `write_<name>_le` for each `name: type` pair.
///
/// Any type with `from_ne_bytes` and `to_ne_bytes` works, so accessors for
/// types this crate leaves out can be generated where they are needed:
///
/// ```
/// mod wide {
///     endianness::endian_accessors! {
///         int128: i128,
///         uint128: u128,
///     }
/// }
///
/// let mut buf = [0u8; 16];
/// wide::write_uint128_be(0x0102, &mut buf);
/// assert_eq!(&buf[14..], &[0x01, 0x02]);
/// assert_eq!(wide::read_uint128_le(&buf), 0x0201 << 112);
/// assert_eq!(wide::read_int128_be(&[0xff; 16]), -1);
/// ```
#[macro_export]
macro_rules! endian_accessors {
    ($($name:ident: $t:ty),* $(,)?) => {
        $(
            $crate::endian_accessors!(@order $name, $t, be, $crate::Endian::Big, "big-endian");
            $crate::endian_accessors!(@order $name, $t, le, $crate::Endian::Little, "little-endian");
        )*
    };
    (@order $name:ident, $t:ty, $suffix:ident, $endian:expr, $desc:literal) => {
        $crate::__paste! {
            $crate::endian_accessors!(
                @emit [<read_ $name _ $suffix>], [<write_ $name _ $suffix>], $t, $endian, $desc
            );
        }
    };
    (@emit $read:ident, $write:ident, $t:ty, $endian:expr, $desc:literal) => {
        #[doc = concat!("Reads a ", $desc, " `", stringify!($t), "` from the start of `src`.")]
        #[inline]
        pub fn $read(src: &[u8]) -> $t {
            let mut bytes = [0u8; ::core::mem::size_of::<$t>()];
            $crate::copy::copy_in_order(src, &mut bytes, ::core::mem::size_of::<$t>(), $endian);
            <$t>::from_ne_bytes(bytes)
        }

        #[doc = concat!("Writes `value` as a ", $desc, " `", stringify!($t), "` to the start of `dst`.")]
        #[inline]
        pub fn $write(value: $t, dst: &mut [u8]) {
            let bytes = value.to_ne_bytes();
            $crate::copy::copy_in_order(&bytes, dst, ::core::mem::size_of::<$t>(), $endian);
        }
    };
}

// f32 and f64 are IEEE-754 binary32 and binary64 on every Rust target.
const _: () = assert!(std::mem::size_of::<f32>() == 4 && std::mem::size_of::<f64>() == 8);

endian_accessors! {
    int16: i16,
    uint16: u16,
    int32: i32,
    uint32: u32,
    int64: i64,
    uint64: u64,
    float32: f32,
    float64: f64,
}
