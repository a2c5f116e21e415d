//! Hash functions used by key and address encoding

use crate::constants::CHECKSUM_SIZE;
use crate::types::{Hash, Hash160};
use bitcoin_hashes::{sha256d, Hash as BitcoinHash};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA256(x)
pub fn sha256(data: &[u8]) -> Hash {
    let result = Sha256::digest(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// SHA256(SHA256(x))
pub fn double_sha256(data: &[u8]) -> Hash {
    sha256d::Hash::hash(data).into_inner()
}

/// RIPEMD160(SHA256(x))
pub fn hash160(data: &[u8]) -> Hash160 {
    let sha256_hash = Sha256::digest(data);
    let ripemd160_hash = Ripemd160::digest(&sha256_hash);
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&ripemd160_hash);
    hash
}

pub fn hash160_hex(data: &[u8]) -> String {
    hex::encode(hash160(data))
}

/// Leading four bytes of SHA256(SHA256(x)), the Base58Check suffix
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let digest = double_sha256(data);
    let mut result = [0u8; CHECKSUM_SIZE];
    result.copy_from_slice(&digest[..CHECKSUM_SIZE]);
    result
}
