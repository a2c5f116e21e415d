//! # BTC-Primitives
//!
//! Bitcoin key, encoding and wire-serialization primitives.
//!
//! This crate provides the building blocks that sit underneath transaction and
//! block handling: byte buffers with explicit hex / binary / integer views, a
//! little-endian binary cursor with compact-size integers, Base58Check, secp256k1
//! private and public keys with WIF import/export, network version bytes and the
//! transaction output wire format.
//!
//! ## Architecture
//!
//! - `buffer`, `parser`, `serialize`: raw bytes and the wire codec
//! - `hash`, `base58`: hashing glue and Base58Check
//! - `curve`, `private_key`, `public_key`: secp256k1 keys
//! - `network`, `address`: per-network version bytes and legacy addresses
//! - `script`, `transaction`: opaque scripts and transaction outputs
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Operations are deterministic apart from key generation
//! 2. **Explicit Context**: Curve parameters and network prefixes are passed in, never global
//! 3. **Exact Version Pinning**: Cryptographic dependencies pinned to exact versions
//! 4. **Explicit Views**: Binary, hex and integer forms are separate calls
//!
//! ## Usage
//!
//! ```rust
//! use btc_primitives::BtcPrimitives;
//! use btc_primitives::network::NetworkParams;
//!
//! let primitives = BtcPrimitives::new();
//! let key = primitives
//!     .private_key_from_hex("4141414141414141414141414141414141414141414141414141414141414141", true)
//!     .unwrap();
//! let wif = primitives.to_wif(&key, &NetworkParams::BITCOIN);
//! assert_eq!(wif, "KyQZJyRyxqNBc31iWzZjUf1vDMXpbcUzwND6AANq44M3v38smDkA");
//! ```

pub mod types;
pub mod constants;
pub mod error;
pub mod buffer;
pub mod serialize;
pub mod parser;
pub mod hash;
pub mod base58;
pub mod network;
pub mod curve;
pub mod private_key;
pub mod public_key;
pub mod address;
pub mod script;
pub mod transaction;

// Re-export commonly used types
pub use types::*;
pub use constants::*;
pub use error::{PrimitivesError, Result};
pub use buffer::ByteBuffer;
pub use serialize::Serializable;
pub use parser::{BinaryCursor, BinaryWriter, Endianness};
pub use network::NetworkParams;
pub use curve::{CurveContext, CurvePoint};
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use script::Script;
pub use transaction::{OutputScript, TransactionOutput};

/// Main primitives entry point, bound to one curve context
///
/// # Examples
///
/// ```
/// use btc_primitives::BtcPrimitives;
/// use btc_primitives::network::NetworkParams;
///
/// let primitives = BtcPrimitives::new();
///
/// // Generate a fresh compressed key and derive its address
/// let key = primitives.generate_private_key(true);
/// let public_key = primitives.public_key(&key);
/// let address = public_key.to_address(&NetworkParams::BITCOIN);
/// assert!(address.starts_with('1'));
///
/// // WIF round trip
/// let wif = primitives.to_wif(&key, &NetworkParams::BITCOIN);
/// assert_eq!(primitives.from_wif(&wif).unwrap(), key);
/// ```
#[derive(Debug, Default)]
pub struct BtcPrimitives {
    curve: CurveContext,
}

impl BtcPrimitives {
    /// Create a new instance with its own secp256k1 context
    ///
    /// # Examples
    ///
    /// ```
    /// use btc_primitives::BtcPrimitives;
    ///
    /// let primitives = BtcPrimitives::new();
    /// ```
    pub fn new() -> Self {
        Self::with_curve(CurveContext::new())
    }

    pub fn with_curve(curve: CurveContext) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> &CurveContext {
        &self.curve
    }

    /// Check that a candidate scalar lies in [1, n-1]
    ///
    /// # Examples
    ///
    /// ```
    /// use btc_primitives::BtcPrimitives;
    ///
    /// let primitives = BtcPrimitives::new();
    /// assert!(primitives.is_valid_key(&[0x41; 32]));
    /// assert!(!primitives.is_valid_key(&[0u8; 32]));
    /// assert!(!primitives.is_valid_key(&[0xff; 32]));
    /// ```
    pub fn is_valid_key(&self, candidate: &[u8]) -> bool {
        PrivateKey::is_valid_key(&self.curve, candidate)
    }

    /// Build a private key from hex
    ///
    /// # Examples
    ///
    /// ```
    /// use btc_primitives::BtcPrimitives;
    ///
    /// let primitives = BtcPrimitives::new();
    /// let key = primitives.private_key_from_hex("01", false).unwrap();
    /// assert_eq!(key.to_unsigned_integer(), "1");
    /// assert!(primitives.private_key_from_hex("00", false).is_err());
    /// ```
    pub fn private_key_from_hex(&self, hex_key: &str, compressed: bool) -> Result<PrivateKey> {
        PrivateKey::from_hex(&self.curve, hex_key, compressed)
    }

    /// Draw a uniformly random key from the OS CSPRNG
    ///
    /// # Examples
    ///
    /// ```
    /// use btc_primitives::BtcPrimitives;
    ///
    /// let primitives = BtcPrimitives::new();
    /// let key = primitives.generate_private_key(false);
    /// assert!(!key.is_compressed());
    /// assert!(primitives.is_valid_key(&key.secret_bytes()));
    /// ```
    pub fn generate_private_key(&self, compressed: bool) -> PrivateKey {
        PrivateKey::generate_new(&self.curve, compressed)
    }

    /// Wallet Import Format for `network`
    ///
    /// # Examples
    ///
    /// ```
    /// use btc_primitives::BtcPrimitives;
    /// use btc_primitives::network::NetworkParams;
    ///
    /// let primitives = BtcPrimitives::new();
    /// let key = primitives.private_key_from_hex(&"41".repeat(32), false).unwrap();
    /// assert_eq!(
    ///     primitives.to_wif(&key, &NetworkParams::BITCOIN),
    ///     "5JK2Rv7ZquC9J11AQZXXU7M9S17z193GPjsKPU3gSANJszAW3dU"
    /// );
    /// ```
    pub fn to_wif(&self, key: &PrivateKey, network: &NetworkParams) -> String {
        key.to_wif(network)
    }

    /// Import a WIF string; the network prefix is not checked
    ///
    /// # Examples
    ///
    /// ```
    /// use btc_primitives::BtcPrimitives;
    ///
    /// let primitives = BtcPrimitives::new();
    /// let key = primitives
    ///     .from_wif("KyQZJyRyxqNBc31iWzZjUf1vDMXpbcUzwND6AANq44M3v38smDkA")
    ///     .unwrap();
    /// assert!(key.is_compressed());
    /// assert_eq!(hex::encode(key.secret_bytes()), "41".repeat(32));
    /// ```
    pub fn from_wif(&self, wif: &str) -> Result<PrivateKey> {
        PrivateKey::from_wif(&self.curve, wif)
    }

    /// Q = d·G
    ///
    /// # Examples
    ///
    /// ```
    /// use btc_primitives::{BtcPrimitives, Serializable};
    ///
    /// let primitives = BtcPrimitives::new();
    /// let key = primitives.private_key_from_hex("01", true).unwrap();
    /// assert_eq!(
    ///     primitives.public_key(&key).to_hex(),
    ///     "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    /// );
    /// ```
    pub fn public_key(&self, key: &PrivateKey) -> PublicKey {
        key.public_key(&self.curve)
    }

    /// Parse a compressed or uncompressed SEC1 public key
    ///
    /// # Examples
    ///
    /// ```
    /// use btc_primitives::BtcPrimitives;
    ///
    /// let primitives = BtcPrimitives::new();
    /// let bytes = hex::decode("02eec7245d6b7d2ccb30380bfbe2a3648cd7a942653f5aa340edcea1f283686619").unwrap();
    /// let public_key = primitives.parse_public_key(&bytes).unwrap();
    /// assert!(public_key.is_compressed());
    /// ```
    pub fn parse_public_key(&self, bytes: &[u8]) -> Result<PublicKey> {
        PublicKey::parse(&self.curve, bytes)
    }

    /// Base58(payload ‖ checksum₄(payload))
    ///
    /// # Examples
    ///
    /// ```
    /// use btc_primitives::BtcPrimitives;
    ///
    /// let primitives = BtcPrimitives::new();
    /// assert_eq!(primitives.encode_check(&[0x00]), "1Wh4bh");
    /// ```
    pub fn encode_check(&self, payload: &[u8]) -> String {
        base58::encode_check(payload)
    }

    /// Decode Base58Check and verify the checksum
    ///
    /// # Examples
    ///
    /// ```
    /// use btc_primitives::{BtcPrimitives, PrimitivesError};
    ///
    /// let primitives = BtcPrimitives::new();
    /// assert_eq!(primitives.decode_check("1Wh4bh").unwrap().to_hex(), "00");
    /// assert!(matches!(
    ///     primitives.decode_check("1Wh4bi"),
    ///     Err(PrimitivesError::Base58ChecksumFailure { .. })
    /// ));
    /// ```
    pub fn decode_check(&self, encoded: &str) -> Result<ByteBuffer> {
        base58::decode_check(encoded)
    }

    /// Parse one transaction output from the cursor
    ///
    /// # Examples
    ///
    /// ```
    /// use btc_primitives::{BtcPrimitives, BinaryCursor};
    ///
    /// let primitives = BtcPrimitives::new();
    /// let bytes = hex::decode("00f2052a01000000015100").unwrap();
    /// let mut cursor = BinaryCursor::new(&bytes);
    /// let output = primitives.parse_transaction_output(&mut cursor).unwrap();
    /// assert_eq!(output.value(), 5_000_000_000);
    /// assert_eq!(output.script_buf().to_hex(), "51");
    /// assert_eq!(cursor.remaining(), 1);
    /// ```
    pub fn parse_transaction_output(&self, cursor: &mut BinaryCursor<'_>) -> Result<TransactionOutput> {
        TransactionOutput::from_cursor(cursor)
    }

    /// value₈ (LE) ‖ CompactSize(|script|) ‖ script
    ///
    /// # Examples
    ///
    /// ```
    /// use btc_primitives::{BtcPrimitives, Script, TransactionOutput};
    ///
    /// let primitives = BtcPrimitives::new();
    /// let output = TransactionOutput::new(1000, Script::from_bytes(vec![0x51]));
    /// assert_eq!(
    ///     primitives.serialize_transaction_output(&output).to_hex(),
    ///     "e8030000000000000151"
    /// );
    /// ```
    pub fn serialize_transaction_output(&self, output: &TransactionOutput) -> ByteBuffer {
        output.serialize()
    }
}
