//! Legacy Base58Check addresses
//!
//! Address = Base58Check(prefix ‖ hash160₂₀)

use crate::base58;
use crate::constants::HASH160_SIZE;
use crate::error::{PrimitivesError, Result};
use crate::network::NetworkParams;
use crate::public_key::PublicKey;
use crate::script::Script;
use crate::types::Hash160;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    PubKeyHash,
    ScriptHash,
}

/// Decoded address payload: version byte + 20-byte hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPayload {
    pub prefix: u8,
    pub hash: Hash160,
}

impl AddressPayload {
    /// Classify against `network`'s version bytes
    pub fn kind(&self, network: &NetworkParams) -> Option<AddressKind> {
        if self.prefix == network.p2pkh_prefix {
            Some(AddressKind::PubKeyHash)
        } else if self.prefix == network.p2sh_prefix {
            Some(AddressKind::ScriptHash)
        } else {
            None
        }
    }
}

pub fn encode(prefix: u8, hash: &Hash160) -> String {
    let mut payload = Vec::with_capacity(1 + HASH160_SIZE);
    payload.push(prefix);
    payload.extend_from_slice(hash);
    base58::encode_check(&payload)
}

pub fn decode(address: &str) -> Result<AddressPayload> {
    let payload = base58::decode_check(address)?;
    match payload.as_bytes().split_first() {
        Some((prefix, hash)) if hash.len() == HASH160_SIZE => {
            let mut result = [0u8; HASH160_SIZE];
            result.copy_from_slice(hash);
            Ok(AddressPayload {
                prefix: *prefix,
                hash: result,
            })
        }
        _ => Err(PrimitivesError::Format(format!(
            "Invalid address payload length: {} bytes",
            payload.len()
        ))),
    }
}

/// Decode and require one of `network`'s address prefixes.
pub fn decode_for_network(address: &str, network: &NetworkParams) -> Result<(AddressKind, Hash160)> {
    let payload = decode(address)?;
    match payload.kind(network) {
        Some(kind) => Ok((kind, payload.hash)),
        None => Err(PrimitivesError::Format(format!(
            "Address prefix {:#04x} does not belong to this network",
            payload.prefix
        ))),
    }
}

pub fn p2pkh(public_key: &PublicKey, network: &NetworkParams) -> String {
    encode(network.p2pkh_prefix, &public_key.pub_key_hash())
}

pub fn p2sh(script: &Script, network: &NetworkParams) -> String {
    encode(network.p2sh_prefix, &script.script_hash())
}
