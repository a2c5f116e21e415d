//! Shared type aliases

/// Hash type: 256-bit hash
pub type Hash = [u8; 32];

/// hash160 digest: RIPEMD160(SHA256(x))
pub type Hash160 = [u8; 20];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Natural number type (satoshi amounts, compact-size values)
pub type Natural = u64;
