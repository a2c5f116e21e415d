//! secp256k1 curve parameters and Bitcoin encoding constants

/// Field prime: p = 2^256 - 2^32 - 977
pub const CURVE_PRIME: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];

/// Group order n
pub const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b,
    0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// Generator x-coordinate
pub const GENERATOR_X: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac,
    0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
    0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9,
    0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
];

/// Generator y-coordinate
pub const GENERATOR_Y: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65,
    0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
    0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19,
    0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8,
];

/// Curve equation y² = x³ + ax + b
pub const CURVE_A: u32 = 0;
pub const CURVE_B: u32 = 7;

/// Private scalar length in bytes
pub const SECRET_KEY_SIZE: usize = 32;

/// Compressed public key: parity prefix + x
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Uncompressed public key: 0x04 + x + y
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

pub const PUBLIC_KEY_PREFIX_EVEN: u8 = 0x02;
pub const PUBLIC_KEY_PREFIX_ODD: u8 = 0x03;
pub const PUBLIC_KEY_PREFIX_UNCOMPRESSED: u8 = 0x04;

/// Trailing WIF byte marking a compressed key
pub const WIF_COMPRESSION_FLAG: u8 = 0x01;

/// Base58Check checksum length
pub const CHECKSUM_SIZE: usize = 4;

/// hash160 digest length
pub const HASH160_SIZE: usize = 20;

/// Compact-size markers
pub const COMPACT_SIZE_U16: u8 = 0xfd;
pub const COMPACT_SIZE_U32: u8 = 0xfe;
pub const COMPACT_SIZE_U64: u8 = 0xff;

/// Transaction output value field width
pub const OUTPUT_VALUE_SIZE: usize = 8;

/// Maximum money supply: 21,000,000 BTC in satoshis
pub const MAX_MONEY: u64 = 21_000_000 * 100_000_000;

/// Satoshis per BTC
pub const SATOSHIS_PER_BTC: u64 = 100_000_000;

/// Script opcodes used by the standard output templates
pub const OP_DUP: u8 = 0x76;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_EQUAL: u8 = 0x87;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_CHECKSIG: u8 = 0xac;
