use endianness::{try_read, try_write, ByteCast, ByteIndex, ByteView, ByteViewMut, Endian, Error, BE, LE};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn short_buffers_are_rejected() {
    init_logging();

    let buf = [0u8; 3];
    assert_eq!(
        try_read::<u32, BE>(&buf),
        Err(Error::BufferTooShort { expected: 4, actual: 3 })
    );
    assert_eq!(
        ByteView::<i64>::new(&buf[1..]).unwrap_err(),
        Error::BufferTooShort { expected: 8, actual: 2 }
    );

    let mut out = [0u8; 1];
    assert!(try_write::<u16, LE>(0xffff, &mut out).is_err());
    assert_eq!(out, [0]);
    assert!(ByteViewMut::<f64>::new(&mut out).is_err());
}

#[test]
fn out_of_range_indices_are_rejected() {
    init_logging();

    assert_eq!(
        ByteIndex::of::<u64>(8),
        Err(Error::IndexOutOfRange { index: 8, size: 8 })
    );
    assert_eq!(
        Error::IndexOutOfRange { index: 8, size: 8 }.to_string(),
        "byte index 8 is out of range for a value of 8 bytes"
    );
}

#[test]
fn records_decode_field_by_field() {
    init_logging();

    // u16 tag, i32 offset, f32 scale; mixed byte orders as some container formats use.
    let record = [0x00, 0x07, 0xfe, 0xff, 0xff, 0xff, 0x40, 0x49, 0x0f, 0xdb];

    let tag = try_read::<u16, BE>(&record).unwrap();
    let offset = try_read::<i32, LE>(&record[2..]).unwrap();
    let scale = ByteView::<f32>::new(&record[6..]).unwrap().read_in(Endian::Big);

    assert_eq!(tag, 7);
    assert_eq!(offset, -2);
    assert_eq!(scale, std::f32::consts::PI);

    let mut encoded = [0u8; 10];
    try_write::<u16, BE>(tag, &mut encoded).unwrap();
    ByteViewMut::<i32>::new(&mut encoded[2..]).unwrap().write::<LE>(offset);
    scale.into_bytes_in(Endian::Big, &mut encoded[6..]);
    assert_eq!(encoded, record);
}
