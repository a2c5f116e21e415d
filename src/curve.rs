//! secp256k1 curve context
//!
//! Holds the immutable group parameters (p, a, b, G, n) together with the
//! `secp256k1` arithmetic context that performs point multiplication.
//! Built once and shared read-only; no locking is needed.

use crate::constants::*;
use num_bigint::BigUint;
use secp256k1::{All, Secp256k1};
use std::sync::OnceLock;

/// An affine curve point (x, y)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurvePoint {
    pub x: BigUint,
    pub y: BigUint,
}

impl CurvePoint {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    pub fn from_coordinates(x: &[u8], y: &[u8]) -> Self {
        Self {
            x: BigUint::from_bytes_be(x),
            y: BigUint::from_bytes_be(y),
        }
    }

    pub fn is_y_odd(&self) -> bool {
        self.y.to_bytes_be().last().map_or(false, |byte| byte & 1 == 1)
    }
}

pub struct CurveContext {
    secp: Secp256k1<All>,
    prime: BigUint,
    a: BigUint,
    b: BigUint,
    order: BigUint,
    generator: CurvePoint,
}

static SHARED: OnceLock<CurveContext> = OnceLock::new();

impl CurveContext {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
            prime: BigUint::from_bytes_be(&CURVE_PRIME),
            a: BigUint::from(CURVE_A),
            b: BigUint::from(CURVE_B),
            order: BigUint::from_bytes_be(&CURVE_ORDER),
            generator: CurvePoint::from_coordinates(&GENERATOR_X, &GENERATOR_Y),
        }
    }

    /// Process-wide instance, initialised on first use.
    pub fn shared() -> &'static CurveContext {
        SHARED.get_or_init(CurveContext::new)
    }

    /// Handle to the EC arithmetic provider
    pub fn secp(&self) -> &Secp256k1<All> {
        &self.secp
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Group order as 32 big-endian bytes
    pub fn order_bytes(&self) -> [u8; 32] {
        CURVE_ORDER
    }

    pub fn generator(&self) -> &CurvePoint {
        &self.generator
    }

    /// OnCurve: y² ≡ x³ + ax + b (mod p), with 0 ≤ x, y < p
    pub fn is_on_curve(&self, point: &CurvePoint) -> bool {
        if point.x >= self.prime || point.y >= self.prime {
            return false;
        }
        let p = &self.prime;
        let lhs = (&point.y * &point.y) % p;
        let rhs = (&point.x * &point.x * &point.x + &self.a * &point.x + &self.b) % p;
        lhs == rhs
    }
}

impl Default for CurveContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CurveContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveContext")
            .field("prime", &self.prime)
            .field("a", &self.a)
            .field("b", &self.b)
            .field("order", &self.order)
            .field("generator", &self.generator)
            .finish()
    }
}
