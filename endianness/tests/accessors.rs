use byteorder::ByteOrder;
use endianness::*;
use paste::paste;
use proptest::prelude::*;

macro_rules! literal_test {
    ($name:ident, $t:ty, $value:expr, [$($byte:expr),*]) => {
        paste! {
            #[test]
            fn [<test_literal_ $name>]() {
                let value: $t = $value;
                let mut expected: Vec<u8> = vec![$($byte),*];
                let mut actual = vec![0u8; std::mem::size_of::<$t>()];

                [<write_ $name _be>](value, &mut actual);
                assert_eq!(actual, expected);
                assert_eq!([<read_ $name _be>](&expected), value);

                expected.reverse();
                [<write_ $name _le>](value, &mut actual);
                assert_eq!(actual, expected);
                assert_eq!([<read_ $name _le>](&expected), value);
            }
        }
    };
}

literal_test!(int16, i16, -2, [0xff, 0xfe]);
literal_test!(uint16, u16, 0x1234, [0x12, 0x34]);
literal_test!(int32, i32, -2, [0xff, 0xff, 0xff, 0xfe]);
literal_test!(uint32, u32, 0x12345678, [0x12, 0x34, 0x56, 0x78]);
literal_test!(int64, i64, -2, [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]);
literal_test!(uint64, u64, 0x123456789abcdef0, [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0]);
literal_test!(float32, f32, -0.5, [0xbf, 0x00, 0x00, 0x00]);
literal_test!(float64, f64, 2.0, [0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);

macro_rules! law_tests {
    ($($name:ident: $t:ty => $bo_read:ident, $bo_write:ident;)*) => {
        paste! {
            proptest! {
                $(
                    #[test]
                    fn [<test_round_trip_ $name>](value: $t) {
                        let mut buf = [0u8; std::mem::size_of::<$t>()];

                        [<write_ $name _be>](value, &mut buf);
                        prop_assert_eq!([<read_ $name _be>](&buf).to_bits(), value.to_bits());

                        [<write_ $name _le>](value, &mut buf);
                        prop_assert_eq!([<read_ $name _le>](&buf).to_bits(), value.to_bits());
                    }

                    #[test]
                    fn [<test_symmetry_ $name>](bytes: [u8; std::mem::size_of::<$t>()]) {
                        let mut reversed = bytes;
                        reversed.reverse();
                        prop_assert_eq!(
                            [<read_ $name _be>](&bytes).to_bits(),
                            [<read_ $name _le>](&reversed).to_bits()
                        );
                    }

                    #[test]
                    fn [<test_byteorder_ $name>](value: $t) {
                        let mut ours = [0u8; std::mem::size_of::<$t>()];
                        let mut theirs = [0u8; std::mem::size_of::<$t>()];

                        [<write_ $name _be>](value, &mut ours);
                        BE::$bo_write(&mut theirs, value);
                        prop_assert_eq!(ours, theirs);
                        prop_assert_eq!(BE::$bo_read(&ours).to_bits(), value.to_bits());

                        [<write_ $name _le>](value, &mut ours);
                        LE::$bo_write(&mut theirs, value);
                        prop_assert_eq!(ours, theirs);
                        prop_assert_eq!(LE::$bo_read(&ours).to_bits(), value.to_bits());
                    }

                    #[test]
                    fn [<test_cast_agrees_ $name>](value: $t) {
                        let mut named = [0u8; std::mem::size_of::<$t>()];
                        let mut generic = [0u8; std::mem::size_of::<$t>()];

                        [<write_ $name _be>](value, &mut named);
                        value.into_bytes::<BE>(&mut generic);
                        prop_assert_eq!(named, generic);

                        [<write_ $name _le>](value, &mut named);
                        value.into_bytes_in(Endian::Little, &mut generic);
                        prop_assert_eq!(named, generic);
                    }
                )*
            }
        }
    };
}

// Integers are compared through a bit-identity helper so floats and integers
// share one set of laws.
trait ToBits: Copy {
    type Bits: PartialEq + std::fmt::Debug;
    fn to_bits(self) -> Self::Bits;
}

macro_rules! int_bits {
    ($($t:ty),*) => {$(
        impl ToBits for $t {
            type Bits = $t;
            fn to_bits(self) -> Self::Bits {
                self
            }
        }
    )*};
}

int_bits!(i16, u16, i32, u32, i64, u64);

impl ToBits for f32 {
    type Bits = u32;
    fn to_bits(self) -> Self::Bits {
        f32::to_bits(self)
    }
}

impl ToBits for f64 {
    type Bits = u64;
    fn to_bits(self) -> Self::Bits {
        f64::to_bits(self)
    }
}

law_tests! {
    int16: i16 => read_i16, write_i16;
    uint16: u16 => read_u16, write_u16;
    int32: i32 => read_i32, write_i32;
    uint32: u32 => read_u32, write_u32;
    int64: i64 => read_i64, write_i64;
    uint64: u64 => read_u64, write_u64;
    float32: f32 => read_f32, write_f32;
    float64: f64 => read_f64, write_f64;
}

#[test]
fn test_nan_payload_survives() {
    let value = f64::from_bits(0x7ff8_0000_dead_beef);
    let mut buf = [0u8; 8];

    write_float64_be(value, &mut buf);
    assert_eq!(buf, [0x7f, 0xf8, 0x00, 0x00, 0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(read_float64_be(&buf).to_bits(), value.to_bits());
}

mod wide {
    endianness::endian_accessors! {
        int128: i128,
        uint128: u128,
    }
}

#[test]
fn test_consumer_generated_accessors() {
    let value = 0x0102030405060708090a0b0c0d0e0f10u128;
    let mut buf = [0u8; 16];

    wide::write_uint128_be(value, &mut buf);
    assert_eq!(buf[0], 0x01);
    assert_eq!(buf[15], 0x10);
    assert_eq!(wide::read_uint128_be(&buf), value);
    assert_eq!(BE::read_u128(&buf), value);

    wide::write_int128_le(-2, &mut buf);
    assert_eq!(buf[0], 0xfe);
    assert!(buf[1..].iter().all(|b| *b == 0xff));
    assert_eq!(wide::read_int128_le(&buf), -2);
}
