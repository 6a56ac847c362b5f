use byteorder::ByteOrder;

use crate::{BE, LE};
use crate::endian::Endian;

/// A byte order fixed at compile time.
///
/// Implemented for `byteorder`'s marker types, so anything generic over
/// `O: Order` can also fall back on the `ByteOrder` methods.
pub trait Order: ByteOrder + Send + Sync + 'static {
    const ENDIAN: Endian;
    const NATIVE: bool = Self::ENDIAN.is_native();
}

impl Order for BE {
    const ENDIAN: Endian = Endian::Big;
}

impl Order for LE {
    const ENDIAN: Endian = Endian::Little;
}
