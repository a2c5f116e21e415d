//! Private keys: scalars in [1, n-1] with a compression flag
//!
//! WIF = Base58Check(prefix ‖ scalar₃₂ ‖ [0x01 if compressed])

use crate::base58;
use crate::buffer::ByteBuffer;
use crate::constants::*;
use crate::curve::CurveContext;
use crate::error::{PrimitivesError, Result};
use crate::network::NetworkParams;
use crate::public_key::PublicKey;
use crate::serialize::Serializable;
use crate::types::Hash160;
use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secp256k1::SecretKey;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey {
    secret: SecretKey,
    compressed: bool,
}

/// Left-pad a big-endian candidate to 32 bytes. `None` if it has more than
/// 32 significant bytes.
fn normalize_scalar(candidate: &[u8]) -> Option<[u8; SECRET_KEY_SIZE]> {
    let excess = candidate.len().saturating_sub(SECRET_KEY_SIZE);
    if candidate[..excess].iter().any(|byte| *byte != 0) {
        return None;
    }
    let significant = &candidate[excess..];
    let mut scalar = [0u8; SECRET_KEY_SIZE];
    scalar[SECRET_KEY_SIZE - significant.len()..].copy_from_slice(significant);
    Some(scalar)
}

impl PrivateKey {
    /// IsValidKey: 𝔹* → {true, false}
    ///
    /// true iff 1 ≤ int(candidate) ≤ n - 1. Values ≥ n are never reduced.
    /// The comparison walks every byte instead of exiting at the first
    /// difference.
    pub fn is_valid_key(ctx: &CurveContext, candidate: &[u8]) -> bool {
        let scalar = match normalize_scalar(candidate) {
            Some(scalar) => scalar,
            None => return false,
        };
        let order = ctx.order_bytes();

        let mut less = 0u8;
        let mut greater = 0u8;
        let mut nonzero = 0u8;
        for (byte, bound) in scalar.iter().zip(order.iter()) {
            let undecided = !(less | greater) & 1;
            less |= undecided & (byte < bound) as u8;
            greater |= undecided & (byte > bound) as u8;
            nonzero |= *byte;
        }

        less == 1 && nonzero != 0
    }

    /// Construct from a big-endian scalar of any length.
    pub fn from_slice(ctx: &CurveContext, bytes: &[u8], compressed: bool) -> Result<Self> {
        if !Self::is_valid_key(ctx, bytes) {
            return Err(PrimitivesError::InvalidPrivateKey(
                "scalar must be in [1, n-1]".to_string(),
            ));
        }
        let scalar = normalize_scalar(bytes).ok_or_else(|| {
            PrimitivesError::InvalidPrivateKey("scalar wider than 32 bytes".to_string())
        })?;
        let secret = SecretKey::from_slice(&scalar)
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { secret, compressed })
    }

    pub fn from_hex(ctx: &CurveContext, hex_key: &str, compressed: bool) -> Result<Self> {
        let buffer = ByteBuffer::from_hex(hex_key)?;
        Self::from_slice(ctx, buffer.as_bytes(), compressed)
    }

    pub fn from_unsigned_integer(ctx: &CurveContext, value: &BigUint, compressed: bool) -> Result<Self> {
        Self::from_slice(ctx, &value.to_bytes_be(), compressed)
    }

    /// Draw a fresh key from the operating system CSPRNG.
    pub fn generate_new(ctx: &CurveContext, compressed: bool) -> Self {
        Self::generate_with_rng(ctx, &mut OsRng, compressed)
    }

    /// Rejection sampling: draw uniform 256-bit candidates until one lies in
    /// [1, n-1]. Out-of-range draws are discarded, never reduced mod n.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(
        ctx: &CurveContext,
        rng: &mut R,
        compressed: bool,
    ) -> Self {
        let mut candidate = [0u8; SECRET_KEY_SIZE];
        loop {
            rng.fill_bytes(&mut candidate);
            if Self::is_valid_key(ctx, &candidate) {
                if let Ok(secret) = SecretKey::from_slice(&candidate) {
                    return Self { secret, compressed };
                }
            }
            log::trace!("key candidate outside [1, n-1], redrawing");
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn set_compressed(&mut self, compressed: bool) {
        self.compressed = compressed;
    }

    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    pub fn secret_bytes(&self) -> [u8; SECRET_KEY_SIZE] {
        self.secret.secret_bytes()
    }

    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    /// Decimal text form of the scalar
    pub fn to_unsigned_integer(&self) -> String {
        BigUint::from_bytes_be(&self.secret_bytes()).to_str_radix(10)
    }

    /// Q = d·G
    pub fn public_key(&self, ctx: &CurveContext) -> PublicKey {
        PublicKey::from_private_key(ctx, self)
    }

    /// hash160 of the public key in the form selected by the compression flag
    pub fn pub_key_hash_bytes(&self, ctx: &CurveContext) -> Hash160 {
        self.public_key(ctx).pub_key_hash()
    }

    pub fn pub_key_hash(&self, ctx: &CurveContext) -> String {
        hex::encode(self.pub_key_hash_bytes(ctx))
    }

    pub fn to_wif(&self, network: &NetworkParams) -> String {
        let mut payload = Vec::with_capacity(1 + SECRET_KEY_SIZE + 1);
        payload.push(network.wif_prefix);
        payload.extend_from_slice(&self.secret_bytes());
        if self.compressed {
            payload.push(WIF_COMPRESSION_FLAG);
        }
        base58::encode_check(&payload)
    }

    /// Parse a WIF string. The prefix byte is not checked; see
    /// [`PrivateKey::from_wif_for_network`].
    pub fn from_wif(ctx: &CurveContext, wif: &str) -> Result<Self> {
        decode_wif(ctx, wif).map(|(_, key)| key)
    }

    /// Parse a WIF string whose prefix must be `network.wif_prefix`.
    pub fn from_wif_for_network(ctx: &CurveContext, wif: &str, network: &NetworkParams) -> Result<Self> {
        let (prefix, key) = decode_wif(ctx, wif)?;
        if prefix != network.wif_prefix {
            return Err(PrimitivesError::Format(format!(
                "WIF prefix {:#04x} does not match network prefix {:#04x}",
                prefix, network.wif_prefix
            )));
        }
        Ok(key)
    }
}

fn decode_wif(ctx: &CurveContext, wif: &str) -> Result<(u8, PrivateKey)> {
    let payload = base58::decode_check(wif)?;
    let (prefix, body) = payload
        .as_bytes()
        .split_first()
        .ok_or_else(|| PrimitivesError::Format("Empty WIF payload".to_string()))?;

    let compressed = match body.len() {
        SECRET_KEY_SIZE => false,
        len if len == SECRET_KEY_SIZE + 1 => {
            if body[SECRET_KEY_SIZE] != WIF_COMPRESSION_FLAG {
                return Err(PrimitivesError::Format(format!(
                    "Invalid WIF compression flag {:#04x}",
                    body[SECRET_KEY_SIZE]
                )));
            }
            true
        }
        len => {
            return Err(PrimitivesError::Format(format!(
                "Invalid WIF payload length: {} bytes",
                len + 1
            )))
        }
    };

    let key = PrivateKey::from_slice(ctx, &body[..SECRET_KEY_SIZE], compressed)?;
    log::debug!("decoded WIF key: prefix {:#04x}, compressed {}", prefix, compressed);
    Ok((*prefix, key))
}

impl Serializable for PrivateKey {
    fn to_buffer(&self) -> ByteBuffer {
        ByteBuffer::from_slice(&self.secret_bytes())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("secret", &"[redacted]")
            .field("compressed", &self.compressed)
            .finish()
    }
}
