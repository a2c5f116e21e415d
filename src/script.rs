//! Opaque script carrier
//!
//! Scripts are carried as raw bytes; nothing here interprets or executes
//! them. Only the two standard output templates are built and recognised.

use crate::buffer::ByteBuffer;
use crate::constants::*;
use crate::error::Result;
use crate::hash::hash160;
use crate::serialize::Serializable;
use crate::types::Hash160;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Script {
    bytes: ByteBuffer,
}

impl Script {
    pub fn new(bytes: ByteBuffer) -> Self {
        Self { bytes }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::new(ByteBuffer::new(bytes))
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self::new(ByteBuffer::from_hex(s)?))
    }

    /// OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG
    pub fn pay_to_pubkey_hash(hash: &Hash160) -> Self {
        let mut bytes = Vec::with_capacity(25);
        bytes.extend_from_slice(&[OP_DUP, OP_HASH160, HASH160_SIZE as u8]);
        bytes.extend_from_slice(hash);
        bytes.extend_from_slice(&[OP_EQUALVERIFY, OP_CHECKSIG]);
        Self::from_bytes(bytes)
    }

    /// OP_HASH160 <20 bytes> OP_EQUAL
    pub fn pay_to_script_hash(hash: &Hash160) -> Self {
        let mut bytes = Vec::with_capacity(23);
        bytes.extend_from_slice(&[OP_HASH160, HASH160_SIZE as u8]);
        bytes.extend_from_slice(hash);
        bytes.push(OP_EQUAL);
        Self::from_bytes(bytes)
    }

    pub fn is_pay_to_pubkey_hash(&self) -> bool {
        let b = self.bytes.as_bytes();
        b.len() == 25
            && b[0] == OP_DUP
            && b[1] == OP_HASH160
            && b[2] == HASH160_SIZE as u8
            && b[23] == OP_EQUALVERIFY
            && b[24] == OP_CHECKSIG
    }

    pub fn is_pay_to_script_hash(&self) -> bool {
        let b = self.bytes.as_bytes();
        b.len() == 23 && b[0] == OP_HASH160 && b[1] == HASH160_SIZE as u8 && b[22] == OP_EQUAL
    }

    /// hash160 of the script bytes, as committed to by a P2SH output
    pub fn script_hash(&self) -> Hash160 {
        hash160(self.bytes.as_bytes())
    }

    pub fn as_buffer(&self) -> &ByteBuffer {
        &self.bytes
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<ByteBuffer> for Script {
    fn from(bytes: ByteBuffer) -> Self {
        Self::new(bytes)
    }
}

impl Serializable for Script {
    fn to_buffer(&self) -> ByteBuffer {
        self.bytes.clone()
    }
}
