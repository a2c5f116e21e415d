//! Integration tests for byte buffers and the binary cursor / writer

use btc_primitives::*;
use btc_primitives::parser::compact_size_len;
use num_bigint::BigUint;

#[test]
fn test_buffer_views() {
    let buffer = ByteBuffer::from_hex("0100ff").unwrap();
    assert_eq!(buffer.as_bytes(), &[0x01, 0x00, 0xff]);
    assert_eq!(buffer.to_hex(), "0100ff");
    assert_eq!(buffer.to_unsigned_integer(), BigUint::from(0x0100ffu32));
    assert_eq!(buffer.to_decimal_string(), "65791");
    assert_eq!(buffer.size(), 3);
    assert_eq!(buffer.hex_size(), 6);
}

#[test]
fn test_buffer_from_unsigned_integer_pads() {
    let buffer = ByteBuffer::from_unsigned_integer(&BigUint::from(1u32), 32).unwrap();
    assert_eq!(buffer.len(), 32);
    assert_eq!(buffer.as_bytes()[31], 0x01);
    assert!(buffer.as_bytes()[..31].iter().all(|byte| *byte == 0));

    let too_wide = ByteBuffer::from_unsigned_integer(&BigUint::from(0x1_0000u32), 2);
    assert!(matches!(too_wide, Err(PrimitivesError::Format(_))));
}

#[test]
fn test_buffer_rejects_bad_hex() {
    assert!(matches!(ByteBuffer::from_hex("abc"), Err(PrimitivesError::Format(_))));
    assert!(matches!(ByteBuffer::from_hex("zz"), Err(PrimitivesError::Format(_))));
}

#[test]
fn test_cursor_reads_mixed_fields() {
    let mut writer = BinaryWriter::new();
    writer
        .write_u32_le(1)
        .write_compact_size(0xfd)
        .write_u32_be(0xdeadbeef)
        .write_length_prefixed(b"abc")
        .write_u64_le(u64::MAX);
    let buffer = writer.into_buffer();

    let mut cursor = BinaryCursor::from_buffer(&buffer);
    assert_eq!(cursor.read_u32_le().unwrap(), 1);
    assert_eq!(cursor.read_compact_size().unwrap(), 0xfd);
    assert_eq!(cursor.read_u32_be().unwrap(), 0xdeadbeef);
    assert_eq!(cursor.read_length_prefixed_bytes().unwrap().as_bytes(), b"abc");
    assert_eq!(cursor.read_u64_le().unwrap(), u64::MAX);
    assert!(cursor.is_exhausted());
}

#[test]
fn test_compact_size_boundaries() {
    let boundaries: [(u64, &str); 7] = [
        (0, "00"),
        (0xfc, "fc"),
        (0xfd, "fdfd00"),
        (0xffff, "fdffff"),
        (0x1_0000, "fe00000100"),
        (0xffff_ffff, "feffffffff"),
        (0x1_0000_0000, "ff0000000001000000"),
    ];
    for (value, encoded) in boundaries {
        let mut writer = BinaryWriter::new();
        writer.write_compact_size(value);
        let buffer = writer.into_buffer();
        assert_eq!(buffer.to_hex(), encoded);
        assert_eq!(compact_size_len(value), buffer.len());

        let mut cursor = BinaryCursor::from_buffer(&buffer);
        assert_eq!(cursor.read_compact_size().unwrap(), value);
        assert!(cursor.is_exhausted());
    }
}

#[test]
fn test_compact_size_rejects_non_canonical() {
    let bytes = hex::decode("fd0100").unwrap();
    let mut cursor = BinaryCursor::new(&bytes);
    assert!(matches!(cursor.read_compact_size(), Err(PrimitivesError::Format(_))));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_truncated_reads_leave_cursor_in_place() {
    let bytes = [0x01, 0x02, 0x03];
    let mut cursor = BinaryCursor::new(&bytes);
    assert!(matches!(
        cursor.read_u32_le(),
        Err(PrimitivesError::TruncatedInput { needed: 4, remaining: 3 })
    ));
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.read_u16_le().unwrap(), 0x0201);
    assert_eq!(cursor.remaining(), 1);
}

#[test]
fn test_uint_width_and_endianness() {
    let mut writer = BinaryWriter::new();
    writer.write_uint(3, 0x010203, Endianness::Big).unwrap();
    writer.write_uint(3, 0x010203, Endianness::Little).unwrap();
    let buffer = writer.into_buffer();
    assert_eq!(buffer.to_hex(), "010203030201");

    let mut cursor = BinaryCursor::from_buffer(&buffer);
    assert_eq!(cursor.read_uint(3, Endianness::Big).unwrap(), 0x010203);
    assert_eq!(cursor.read_uint(3, Endianness::Little).unwrap(), 0x010203);

    let mut writer = BinaryWriter::new();
    assert!(matches!(writer.write_uint(1, 0x100, Endianness::Little), Err(PrimitivesError::Format(_))));
    assert!(matches!(writer.write_uint(9, 0, Endianness::Little), Err(PrimitivesError::Format(_))));
}

#[test]
fn test_network_params_from_json() {
    let json = r#"{"p2pkh_prefix":111,"p2sh_prefix":196,"wif_prefix":239}"#;
    let network = NetworkParams::from_json(json).unwrap();
    assert_eq!(network, NetworkParams::TESTNET);
    assert_eq!(NetworkParams::from_json(&network.to_json().unwrap()).unwrap(), network);
    assert!(matches!(NetworkParams::from_json("{}"), Err(PrimitivesError::Format(_))));
}
