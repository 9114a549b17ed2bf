//! Arithmetic modulo the curve's field prime.
//!
//! Elements are plain `BigUint` values kept in `[0, p)`. All operations are
//! variable time.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// The prime field `F_p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    p: BigUint,
    /// `(p + 1) / 4`, the square-root exponent for `p ≡ 3 (mod 4)`.
    sqrt_exp: BigUint,
    byte_len: usize,
}

impl Field {
    /// Creates the field of integers modulo `p`.
    ///
    /// `p` must be odd and congruent to 3 modulo 4 for [`Field::sqrt`] to be
    /// meaningful.
    pub fn new(p: BigUint) -> Self {
        let sqrt_exp = (&p >> 2u32) + BigUint::one();
        let byte_len = p.bits().div_ceil(8) as usize;

        Self {
            p,
            sqrt_exp,
            byte_len,
        }
    }

    /// The modulus `p`.
    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Number of bytes in a fixed-width big-endian element encoding.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    #[inline]
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.p
    }

    /// Maps a signed integer into the field.
    pub fn from_i64(&self, v: i64) -> BigUint {
        let magnitude = self.reduce(&BigUint::from(v.unsigned_abs()));

        if v < 0 {
            self.neg(&magnitude)
        } else {
            magnitude
        }
    }

    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.p
    }

    #[inline]
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + &self.p - self.reduce(b)) % &self.p
    }

    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    #[inline]
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    #[inline]
    pub fn neg(&self, a: &BigUint) -> BigUint {
        (&self.p - self.reduce(a)) % &self.p
    }

    /// Multiplicative inverse, or `None` when `a` shares a factor with `p`.
    pub fn inv(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return None;
        }

        a.modinv(&self.p)
    }

    /// Square root of `v` whose least significant bit equals `lsb`.
    ///
    /// Uses `r = v^((p+1)/4)`, valid because `p ≡ 3 (mod 4)`, then picks
    /// `r` or `p − r` by parity and checks `r² ≡ v`. Returns `None` when `v`
    /// is not a quadratic residue. A zero radicand yields zero regardless of
    /// `lsb`.
    pub fn sqrt(&self, v: &BigUint, lsb: bool) -> Option<BigUint> {
        let v = self.reduce(v);
        if v.is_zero() {
            return Some(BigUint::zero());
        }

        let mut r = v.modpow(&self.sqrt_exp, &self.p);
        if r.bit(0) != lsb {
            r = &self.p - &r;
        }

        (self.square(&r) == v).then_some(r)
    }

    /// Fixed-width big-endian encoding of `a mod p`.
    pub fn to_bytes(&self, a: &BigUint) -> Vec<u8> {
        let digits = self.reduce(a).to_bytes_be();

        let mut out = vec![0u8; self.byte_len];
        out[self.byte_len - digits.len()..].copy_from_slice(&digits);

        out
    }
}
