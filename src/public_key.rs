//! Public keys: curve points with SEC1 compressed / uncompressed encodings
//!
//! - compressed:   (0x02 | 0x03) ‖ x₃₂         33 bytes
//! - uncompressed: 0x04 ‖ x₃₂ ‖ y₃₂            65 bytes

use crate::address;
use crate::buffer::ByteBuffer;
use crate::constants::*;
use crate::curve::{CurveContext, CurvePoint};
use crate::error::{PrimitivesError, Result};
use crate::hash::hash160;
use crate::network::NetworkParams;
use crate::private_key::PrivateKey;
use crate::serialize::Serializable;
use crate::types::Hash160;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    inner: secp256k1::PublicKey,
    compressed: bool,
}

impl PublicKey {
    /// Q = d·G, carrying the private key's compression flag
    pub fn from_private_key(ctx: &CurveContext, private_key: &PrivateKey) -> Self {
        Self {
            inner: secp256k1::PublicKey::from_secret_key(ctx.secp(), private_key.secret_key()),
            compressed: private_key.is_compressed(),
        }
    }

    /// Parse a 33-byte compressed or 65-byte uncompressed encoding.
    pub fn parse(ctx: &CurveContext, bytes: &[u8]) -> Result<Self> {
        let prefix = *bytes
            .first()
            .ok_or_else(|| PrimitivesError::Format("Empty public key".to_string()))?;

        let compressed = match (prefix, bytes.len()) {
            (PUBLIC_KEY_PREFIX_EVEN | PUBLIC_KEY_PREFIX_ODD, COMPRESSED_PUBLIC_KEY_SIZE) => true,
            (PUBLIC_KEY_PREFIX_UNCOMPRESSED, UNCOMPRESSED_PUBLIC_KEY_SIZE) => {
                let point = CurvePoint::from_coordinates(&bytes[1..33], &bytes[33..65]);
                if !ctx.is_on_curve(&point) {
                    return Err(PrimitivesError::InvalidPublicKey(
                        "point is not on the curve".to_string(),
                    ));
                }
                false
            }
            (PUBLIC_KEY_PREFIX_EVEN | PUBLIC_KEY_PREFIX_ODD | PUBLIC_KEY_PREFIX_UNCOMPRESSED, len) => {
                return Err(PrimitivesError::Format(format!(
                    "Invalid public key length {} for prefix {:#04x}",
                    len, prefix
                )))
            }
            (other, _) => {
                return Err(PrimitivesError::Format(format!(
                    "Invalid public key prefix {:#04x}",
                    other
                )))
            }
        };

        let inner = secp256k1::PublicKey::from_slice(bytes)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(Self { inner, compressed })
    }

    pub fn from_hex(ctx: &CurveContext, hex_key: &str) -> Result<Self> {
        let buffer = ByteBuffer::from_hex(hex_key)?;
        Self::parse(ctx, buffer.as_bytes())
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    /// Encode in the requested form regardless of this key's own flag.
    pub fn serialize(&self, compressed: bool) -> ByteBuffer {
        if compressed {
            ByteBuffer::from_slice(&self.inner.serialize())
        } else {
            ByteBuffer::from_slice(&self.inner.serialize_uncompressed())
        }
    }

    /// Affine coordinates (x, y)
    pub fn point(&self) -> CurvePoint {
        let raw = self.inner.serialize_uncompressed();
        CurvePoint::from_coordinates(&raw[1..33], &raw[33..65])
    }

    pub fn pub_key_hash(&self) -> Hash160 {
        hash160(self.serialize(self.compressed).as_bytes())
    }

    pub fn pub_key_hash_hex(&self) -> String {
        hex::encode(self.pub_key_hash())
    }

    /// Pay-to-pubkey-hash address on `network`
    pub fn to_address(&self, network: &NetworkParams) -> String {
        address::p2pkh(self, network)
    }
}

impl Serializable for PublicKey {
    fn to_buffer(&self) -> ByteBuffer {
        self.serialize(self.compressed)
    }
}
