//! Immutable byte buffer with explicit hex / binary / integer views

use crate::error::{PrimitivesError, Result};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable, length-known byte sequence.
///
/// There are no mutating accessors: every transformation (`slice`, `concat`)
/// yields a new buffer.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn from_slice(bytes: &[u8]) -> Self {
        Self { bytes: bytes.to_vec() }
    }

    /// Decode a hex string. Odd length and non-hex characters are format errors.
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self { bytes: hex::decode(s)? })
    }

    /// Big-endian encoding of `value`, left-padded with zeros to `width` bytes.
    pub fn from_unsigned_integer(value: &BigUint, width: usize) -> Result<Self> {
        let raw = value.to_bytes_be();
        // BigUint encodes zero as a single 0x00 byte
        let significant: &[u8] = if raw == [0] { &[] } else { raw.as_slice() };
        if significant.len() > width {
            return Err(PrimitivesError::Format(format!(
                "Integer needs {} bytes, width is {}",
                significant.len(),
                width
            )));
        }
        let mut bytes = vec![0u8; width - significant.len()];
        bytes.extend_from_slice(significant);
        Ok(Self { bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// The buffer read as an unsigned big-endian integer.
    pub fn to_unsigned_integer(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Decimal text form of [`ByteBuffer::to_unsigned_integer`].
    pub fn to_decimal_string(&self) -> String {
        self.to_unsigned_integer().to_str_radix(10)
    }

    pub fn slice(&self, offset: usize, len: usize) -> Result<Self> {
        let end = offset.checked_add(len).filter(|end| *end <= self.bytes.len());
        match end {
            Some(end) => Ok(Self::from_slice(&self.bytes[offset..end])),
            None => Err(PrimitivesError::TruncatedInput {
                needed: len,
                remaining: self.bytes.len().saturating_sub(offset),
            }),
        }
    }

    pub fn concat(&self, other: &ByteBuffer) -> Self {
        let mut bytes = Vec::with_capacity(self.len() + other.len());
        bytes.extend_from_slice(&self.bytes);
        bytes.extend_from_slice(&other.bytes);
        Self { bytes }
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteBuffer({})", self.to_hex())
    }
}
