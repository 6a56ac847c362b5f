//! Reading and writing fixed-width numbers in a chosen byte order, whatever
//! the byte order of the host.
//!
//! ```
//! use endianness::{read_uint16_be, read_uint16_le, write_uint16_be, write_uint16_le};
//!
//! let data = [0x12, 0x34];
//! assert_eq!(read_uint16_be(&data), 0x1234);
//! assert_eq!(read_uint16_le(&data), 0x3412);
//!
//! let mut buf = [0u8; 2];
//! write_uint16_be(0x1234, &mut buf);
//! assert_eq!(buf, [0x12, 0x34]);
//! write_uint16_le(0x1234, &mut buf);
//! assert_eq!(buf, [0x34, 0x12]);
//! ```
//!
//! Code that is generic over the byte order uses the [`Order`] marker types
//! with [`ByteCast`]:
//!
//! ```
//! use endianness::{ByteCast, Order, BE, LE};
//!
//! fn header<O: Order>(buf: &[u8]) -> (u16, u32) {
//!     (u16::from_bytes::<O>(buf), u32::from_bytes::<O>(&buf[2..]))
//! }
//!
//! let buf = [0x00, 0x01, 0x00, 0x00, 0x00, 0x02];
//! assert_eq!(header::<BE>(&buf), (1, 2));
//! assert_eq!(header::<LE>(&buf), (0x100, 0x02000000));
//! ```

pub use byteorder::{BE, LE};
pub use byteorder::NativeEndian as NE;

#[doc(hidden)]
pub use paste::paste as __paste;

pub mod endian;
pub use endian::{Endian, IS_BIG_ENDIAN, IS_LITTLE_ENDIAN};

pub mod error;
pub use error::{Error, ParseEndianError};

pub mod index;
pub use index::{index_be, index_hb, index_lb, index_le, Addressing, ByteIndex};

pub mod order;
pub use order::Order;

pub mod copy;
pub use copy::{copy_be, copy_in_order, copy_le, copy_ordered, copy_swapped};

pub mod cast;
pub use cast::ByteCast;

pub mod accessors;
pub use accessors::*;

pub mod view;
pub use view::{try_read, try_write, ByteView, ByteViewMut};
