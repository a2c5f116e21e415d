//! Error types for key, encoding and serialization primitives

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitivesError {
    #[error("Format error: {0}")]
    Format(String),

    #[error("Base58 checksum mismatch: expected {expected}, found {actual}")]
    Base58ChecksumFailure { expected: String, actual: String },

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(err: hex::FromHexError) -> Self {
        PrimitivesError::Format(format!("Invalid hex: {}", err))
    }
}

impl From<bs58::decode::Error> for PrimitivesError {
    fn from(err: bs58::decode::Error) -> Self {
        PrimitivesError::Format(format!("Invalid base58: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, PrimitivesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_error_maps_to_format() {
        let err: PrimitivesError = hex::decode("abc").unwrap_err().into();
        assert!(matches!(err, PrimitivesError::Format(_)));
    }

    #[test]
    fn test_base58_error_maps_to_format() {
        let err: PrimitivesError = bs58::decode("0OIl").into_vec().unwrap_err().into();
        assert!(matches!(err, PrimitivesError::Format(_)));
    }

    #[test]
    fn test_error_display() {
        let err = PrimitivesError::TruncatedInput { needed: 8, remaining: 3 };
        assert_eq!(err.to_string(), "Truncated input: needed 8 bytes, 3 remaining");
    }
}
