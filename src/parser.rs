//! Binary cursor and writer for Bitcoin wire serialization
//!
//! Every reader operation has a writer mirror using the same byte order and
//! the same compact-size thresholds, so write-then-read is lossless.

use crate::buffer::ByteBuffer;
use crate::constants::*;
use crate::error::{PrimitivesError, Result};
use crate::types::Natural;

/// Byte order of a fixed-width integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 || width > 8 {
        return Err(PrimitivesError::Format(format!(
            "Unsupported integer width: {} bytes",
            width
        )));
    }
    Ok(())
}

/// Read cursor over a borrowed byte source.
#[derive(Debug, Clone)]
pub struct BinaryCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn from_buffer(buffer: &'a ByteBuffer) -> Self {
        Self::new(buffer.as_bytes())
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(PrimitivesError::TruncatedInput { needed: n, remaining });
        }
        let data = self.data;
        let slice = &data[self.position..self.position + n];
        self.position += n;
        Ok(slice)
    }

    /// Read exactly `n` bytes. The cursor does not advance on failure.
    pub fn read_fixed_bytes(&mut self, n: usize) -> Result<ByteBuffer> {
        self.take(n).map(ByteBuffer::from_slice)
    }

    /// Read an unsigned integer of `width` bytes (1..=8).
    pub fn read_uint(&mut self, width: usize, order: Endianness) -> Result<u64> {
        check_width(width)?;
        let bytes = self.take(width)?;
        let mut value = 0u64;
        match order {
            Endianness::Big => {
                for byte in bytes {
                    value = (value << 8) | u64::from(*byte);
                }
            }
            Endianness::Little => {
                for byte in bytes.iter().rev() {
                    value = (value << 8) | u64::from(*byte);
                }
            }
        }
        Ok(value)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(self.read_uint(2, Endianness::Little)? as u16)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(self.read_uint(4, Endianness::Little)? as u32)
    }

    pub fn read_u64_le(&mut self) -> Result<u64> {
        self.read_uint(8, Endianness::Little)
    }

    pub fn read_u32_be(&mut self) -> Result<u32> {
        Ok(self.read_uint(4, Endianness::Big)? as u32)
    }

    pub fn read_u64_be(&mut self) -> Result<u64> {
        self.read_uint(8, Endianness::Big)
    }

    /// ReadCompactSize: 𝔹* → ℕ
    ///
    /// - 0x00..=0xfc: the byte itself
    /// - 0xfd: next 2 bytes little-endian, value ≥ 0xfd
    /// - 0xfe: next 4 bytes little-endian, value > 0xffff
    /// - 0xff: next 8 bytes little-endian, value > 0xffffffff
    ///
    /// Encodings that would fit a shorter form are rejected.
    pub fn read_compact_size(&mut self) -> Result<Natural> {
        let start = self.position;
        let marker = self.read_u8()?;
        let (value, minimum) = match marker {
            COMPACT_SIZE_U16 => (self.read_uint(2, Endianness::Little), 0xfd),
            COMPACT_SIZE_U32 => (self.read_uint(4, Endianness::Little), 0x1_0000),
            COMPACT_SIZE_U64 => (self.read_uint(8, Endianness::Little), 0x1_0000_0000),
            byte => return Ok(Natural::from(byte)),
        };
        let value = match value {
            Ok(value) => value,
            Err(err) => {
                self.position = start;
                return Err(err);
            }
        };
        if value < minimum {
            self.position = start;
            log::debug!("non-canonical compact size {:#x} behind marker {:#04x}", value, marker);
            return Err(PrimitivesError::Format(format!(
                "Non-canonical compact size {} for marker {:#04x}",
                value, marker
            )));
        }
        Ok(value)
    }

    /// Read a compact-size length prefix followed by that many bytes.
    pub fn read_length_prefixed_bytes(&mut self) -> Result<ByteBuffer> {
        let start = self.position;
        let len = self.read_compact_size()?;
        let remaining = self.remaining();
        let len = match usize::try_from(len) {
            Ok(len) if len <= remaining => len,
            _ => {
                self.position = start;
                return Err(PrimitivesError::TruncatedInput {
                    needed: usize::try_from(len).unwrap_or(usize::MAX),
                    remaining,
                });
            }
        };
        self.read_fixed_bytes(len)
    }
}

/// Append-only writer producing a [`ByteBuffer`].
#[derive(Debug, Clone, Default)]
pub struct BinaryWriter {
    bytes: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write `value` as a `width`-byte unsigned integer (1..=8).
    pub fn write_uint(&mut self, width: usize, value: u64, order: Endianness) -> Result<&mut Self> {
        check_width(width)?;
        if width < 8 && value >> (width * 8) != 0 {
            return Err(PrimitivesError::Format(format!(
                "Value {} does not fit in {} bytes",
                value, width
            )));
        }
        let le = value.to_le_bytes();
        match order {
            Endianness::Little => self.bytes.extend_from_slice(&le[..width]),
            Endianness::Big => self.bytes.extend(le[..width].iter().rev()),
        }
        Ok(self)
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.bytes.push(value);
        self
    }

    pub fn write_u16_le(&mut self, value: u16) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u32_le(&mut self, value: u32) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u64_le(&mut self, value: u64) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u32_be(&mut self, value: u32) -> &mut Self {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_u64_be(&mut self, value: u64) -> &mut Self {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Encode a number as a Bitcoin compact size
    pub fn write_compact_size(&mut self, value: Natural) -> &mut Self {
        if value < u64::from(COMPACT_SIZE_U16) {
            self.write_u8(value as u8)
        } else if value <= 0xffff {
            self.write_u8(COMPACT_SIZE_U16).write_u16_le(value as u16)
        } else if value <= 0xffff_ffff {
            self.write_u8(COMPACT_SIZE_U32).write_u32_le(value as u32)
        } else {
            self.write_u8(COMPACT_SIZE_U64).write_u64_le(value)
        }
    }

    /// Compact-size length prefix followed by the bytes themselves.
    pub fn write_length_prefixed(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_compact_size(bytes.len() as Natural).write_bytes(bytes)
    }

    pub fn into_buffer(self) -> ByteBuffer {
        ByteBuffer::new(self.bytes)
    }
}

/// Size in bytes of the compact-size encoding of `value`
pub fn compact_size_len(value: Natural) -> usize {
    match value {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_compact(value: Natural) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        writer.write_compact_size(value);
        writer.into_buffer().into_bytes()
    }

    #[test]
    fn test_read_fixed_bytes() {
        let data = [1u8, 2, 3, 4];
        let mut cursor = BinaryCursor::new(&data);
        assert_eq!(cursor.read_fixed_bytes(3).unwrap().to_hex(), "010203");
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_read_fixed_bytes_truncated() {
        let data = [1u8, 2];
        let mut cursor = BinaryCursor::new(&data);
        let result = cursor.read_fixed_bytes(3);
        assert_eq!(result, Err(PrimitivesError::TruncatedInput { needed: 3, remaining: 2 }));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_read_uint_endianness() {
        let data = [0x01u8, 0x02, 0x03, 0x04];
        let mut le = BinaryCursor::new(&data);
        assert_eq!(le.read_uint(4, Endianness::Little).unwrap(), 0x04030201);
        let mut be = BinaryCursor::new(&data);
        assert_eq!(be.read_uint(4, Endianness::Big).unwrap(), 0x01020304);
    }

    #[test]
    fn test_read_uint_invalid_width() {
        let data = [0u8; 16];
        let mut cursor = BinaryCursor::new(&data);
        assert!(matches!(cursor.read_uint(0, Endianness::Big), Err(PrimitivesError::Format(_))));
        assert!(matches!(cursor.read_uint(9, Endianness::Big), Err(PrimitivesError::Format(_))));
    }

    #[test]
    fn test_read_u64_le() {
        let data = 5_000_000_000u64.to_le_bytes();
        let mut cursor = BinaryCursor::new(&data);
        assert_eq!(cursor.read_u64_le().unwrap(), 5_000_000_000);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_compact_size_encoding_boundaries() {
        assert_eq!(encode_compact(0), vec![0x00]);
        assert_eq!(encode_compact(0xfc), vec![0xfc]);
        assert_eq!(encode_compact(0xfd), vec![0xfd, 0xfd, 0x00]);
        assert_eq!(encode_compact(0xffff), vec![0xfd, 0xff, 0xff]);
        assert_eq!(encode_compact(0x1_0000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(encode_compact(0xffff_ffff), vec![0xfe, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(
            encode_compact(0x1_0000_0000),
            vec![0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_compact_size_len_matches_encoding() {
        for value in [0, 0xfc, 0xfd, 0xffff, 0x1_0000, 0xffff_ffff, 0x1_0000_0000, u64::MAX] {
            assert_eq!(compact_size_len(value), encode_compact(value).len());
        }
    }

    #[test]
    fn test_read_compact_size_each_marker() {
        for value in [0x10, 0xfd, 0x1234, 0x0102_0304, 0x0102_0304_0506] {
            let encoded = encode_compact(value);
            let mut cursor = BinaryCursor::new(&encoded);
            assert_eq!(cursor.read_compact_size().unwrap(), value);
            assert!(cursor.is_exhausted());
        }
    }

    #[test]
    fn test_read_compact_size_non_canonical() {
        let data = [0xfdu8, 0x10, 0x00];
        let mut cursor = BinaryCursor::new(&data);
        assert!(matches!(cursor.read_compact_size(), Err(PrimitivesError::Format(_))));
        assert_eq!(cursor.position(), 0);

        let data = [0xfeu8, 0xff, 0xff, 0x00, 0x00];
        let mut cursor = BinaryCursor::new(&data);
        assert!(matches!(cursor.read_compact_size(), Err(PrimitivesError::Format(_))));
    }

    #[test]
    fn test_read_compact_size_truncated() {
        let data = [0xfeu8, 0x01, 0x02];
        let mut cursor = BinaryCursor::new(&data);
        assert_eq!(
            cursor.read_compact_size(),
            Err(PrimitivesError::TruncatedInput { needed: 4, remaining: 2 })
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_read_length_prefixed_bytes() {
        let data = [0x03u8, 0xaa, 0xbb, 0xcc, 0xdd];
        let mut cursor = BinaryCursor::new(&data);
        assert_eq!(cursor.read_length_prefixed_bytes().unwrap().to_hex(), "aabbcc");
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_read_length_prefixed_bytes_truncated() {
        let data = [0x05u8, 0xaa, 0xbb];
        let mut cursor = BinaryCursor::new(&data);
        assert_eq!(
            cursor.read_length_prefixed_bytes(),
            Err(PrimitivesError::TruncatedInput { needed: 5, remaining: 2 })
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_read_length_prefixed_bytes_huge_prefix() {
        let data = [0xffu8, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00];
        let mut cursor = BinaryCursor::new(&data);
        assert!(matches!(
            cursor.read_length_prefixed_bytes(),
            Err(PrimitivesError::TruncatedInput { remaining: 1, .. })
        ));
    }

    #[test]
    fn test_write_uint() {
        let mut writer = BinaryWriter::new();
        writer.write_uint(2, 0x0102, Endianness::Big).unwrap();
        writer.write_uint(2, 0x0102, Endianness::Little).unwrap();
        writer.write_uint(3, 0x010203, Endianness::Little).unwrap();
        assert_eq!(writer.into_buffer().to_hex(), "01020201030201");
    }

    #[test]
    fn test_write_uint_overflow() {
        let mut writer = BinaryWriter::new();
        assert!(matches!(writer.write_uint(1, 0x100, Endianness::Little), Err(PrimitivesError::Format(_))));
        assert!(matches!(writer.write_uint(9, 1, Endianness::Little), Err(PrimitivesError::Format(_))));
        assert!(writer.is_empty());
    }

    #[test]
    fn test_write_then_read_mirror() {
        let mut writer = BinaryWriter::new();
        writer
            .write_u8(7)
            .write_u32_le(0xdeadbeef)
            .write_u64_le(u64::MAX)
            .write_u32_be(0x01020304)
            .write_u64_be(42)
            .write_length_prefixed(&[0x51; 300]);
        let buffer = writer.into_buffer();

        let mut cursor = BinaryCursor::from_buffer(&buffer);
        assert_eq!(cursor.read_u8().unwrap(), 7);
        assert_eq!(cursor.read_u32_le().unwrap(), 0xdeadbeef);
        assert_eq!(cursor.read_u64_le().unwrap(), u64::MAX);
        assert_eq!(cursor.read_u32_be().unwrap(), 0x01020304);
        assert_eq!(cursor.read_u64_be().unwrap(), 42);
        assert_eq!(cursor.read_length_prefixed_bytes().unwrap().as_bytes(), &[0x51; 300][..]);
        assert!(cursor.is_exhausted());
    }
}
