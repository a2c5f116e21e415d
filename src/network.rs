//! Network version bytes for address and WIF encoding

use crate::error::{PrimitivesError, Result};
use serde::{Deserialize, Serialize};

/// The three version bytes that parameterize Base58Check encodings.
///
/// Plain configuration: passed explicitly into every encode/decode call that
/// needs it, never read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkParams {
    pub p2pkh_prefix: u8,
    pub p2sh_prefix: u8,
    pub wif_prefix: u8,
}

impl NetworkParams {
    /// Bitcoin mainnet: addresses start with '1' / '3', WIF with '5' / 'K' / 'L'
    pub const BITCOIN: NetworkParams = NetworkParams {
        p2pkh_prefix: 0x00,
        p2sh_prefix: 0x05,
        wif_prefix: 0x80,
    };

    /// Bitcoin testnet / signet / regtest legacy prefixes
    pub const TESTNET: NetworkParams = NetworkParams {
        p2pkh_prefix: 0x6f,
        p2sh_prefix: 0xc4,
        wif_prefix: 0xef,
    };

    pub const fn new(p2pkh_prefix: u8, p2sh_prefix: u8, wif_prefix: u8) -> Self {
        Self {
            p2pkh_prefix,
            p2sh_prefix,
            wif_prefix,
        }
    }

    /// Build from three single-byte hex strings, e.g. `("00", "05", "80")`.
    pub fn from_hex(p2pkh: &str, p2sh: &str, wif: &str) -> Result<Self> {
        Ok(Self::new(parse_prefix(p2pkh)?, parse_prefix(p2sh)?, parse_prefix(wif)?))
    }

    /// Load from a JSON document with the three prefix fields.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| PrimitivesError::Format(format!("Invalid network parameters: {}", e)))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| PrimitivesError::Format(format!("Cannot encode network parameters: {}", e)))
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self::BITCOIN
    }
}

fn parse_prefix(s: &str) -> Result<u8> {
    match hex::decode(s)?.as_slice() {
        [byte] => Ok(*byte),
        other => Err(PrimitivesError::Format(format!(
            "Network prefix must be one byte, got {}",
            other.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let network = NetworkParams::from_hex("00", "05", "80").unwrap();
        assert_eq!(network, NetworkParams::BITCOIN);
    }

    #[test]
    fn test_from_hex_rejects_multi_byte() {
        let result = NetworkParams::from_hex("0000", "05", "80");
        assert!(matches!(result, Err(PrimitivesError::Format(_))));
    }

    #[test]
    fn test_from_hex_rejects_empty_and_garbage() {
        assert!(matches!(NetworkParams::from_hex("", "05", "80"), Err(PrimitivesError::Format(_))));
        assert!(matches!(NetworkParams::from_hex("00", "xx", "80"), Err(PrimitivesError::Format(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let json = NetworkParams::TESTNET.to_json().unwrap();
        assert_eq!(NetworkParams::from_json(&json).unwrap(), NetworkParams::TESTNET);
    }

    #[test]
    fn test_from_json_document() {
        let json = r#"{"p2pkh_prefix": 0, "p2sh_prefix": 5, "wif_prefix": 128}"#;
        assert_eq!(NetworkParams::from_json(json).unwrap(), NetworkParams::BITCOIN);
    }

    #[test]
    fn test_from_json_rejects_out_of_range_byte() {
        let json = r#"{"p2pkh_prefix": 256, "p2sh_prefix": 5, "wif_prefix": 128}"#;
        assert!(matches!(NetworkParams::from_json(json), Err(PrimitivesError::Format(_))));
    }

    #[test]
    fn test_default_is_mainnet() {
        assert_eq!(NetworkParams::default(), NetworkParams::BITCOIN);
    }
}
