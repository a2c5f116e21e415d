//! Base58 and Base58Check text encoding
//!
//! Base58Check(payload) = Base58(payload ‖ SHA256(SHA256(payload))[0..4])
//!
//! The checksum is the only integrity gate for WIF and address strings:
//! [`decode_check`] never hands out a payload whose checksum failed.

use crate::buffer::ByteBuffer;
use crate::constants::CHECKSUM_SIZE;
use crate::error::{PrimitivesError, Result};
use crate::hash::checksum;

/// Plain Base58: leading zero bytes map to leading '1' characters, the rest
/// is the big-endian integer written in base 58.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Inverse of [`encode`]. Characters outside the alphabet are format errors.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    Ok(bs58::decode(s).into_vec()?)
}

pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_SIZE);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    encode(&data)
}

/// Decode a Base58Check string and verify its trailing checksum.
pub fn decode_check(s: &str) -> Result<ByteBuffer> {
    let mut data = decode(s)?;
    if data.len() < CHECKSUM_SIZE {
        return Err(PrimitivesError::Format(format!(
            "Base58Check data too short: {} bytes",
            data.len()
        )));
    }

    let split = data.len() - CHECKSUM_SIZE;
    let expected = checksum(&data[..split]);
    let actual = &data[split..];
    if expected[..] != *actual {
        log::debug!(
            "base58check checksum mismatch: expected {}, found {}",
            hex::encode(expected),
            hex::encode(actual)
        );
        return Err(PrimitivesError::Base58ChecksumFailure {
            expected: hex::encode(expected),
            actual: hex::encode(actual),
        });
    }

    data.truncate(split);
    Ok(ByteBuffer::new(data))
}
