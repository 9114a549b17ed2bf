//! Parameter definitions and validation for the Edwards curve.
//!
//! The curve is `x² + y² = 1 + d·x²·y²` over the field of integers modulo the
//! Mersenne number `p = 2^n − 1`. The base point is the point with the given
//! x-coordinate and an even y-coordinate.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Largest accepted modulus exponent.
const MAX_MODULUS_EXPONENT: u32 = 8192;

/// Configuration parameters for the curve.
///
/// # Defaults
///
/// The default is E521: `p = 2^521 − 1`, `d = −376014`, base point
/// x-coordinate `4`, cofactor `4`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Exponent `n` of the field modulus `p = 2^n − 1`.
    pub modulus_exponent: u32,
    /// Edwards coefficient `d`.
    pub d: i64,
    /// x-coordinate of the base point.
    pub base_x: u64,
    /// Curve cofactor. Every secret scalar is multiplied by it.
    pub cofactor: u32,
}

impl CurveParams {
    /// E521 parameters.
    pub const E521: CurveParams = CurveParams {
        modulus_exponent: 521,
        d: -376014,
        base_x: 4,
        cofactor: 4,
    };

    /// Field modulus `2^n − 1`.
    pub fn modulus(&self) -> BigUint {
        (BigUint::one() << self.modulus_exponent) - BigUint::one()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.modulus_exponent < 3 {
            return Err(Error::InvalidCurveParams(
                "modulus exponent must be at least 3".into(),
            ));
        }

        if self.modulus_exponent > MAX_MODULUS_EXPONENT {
            return Err(Error::InvalidCurveParams(format!(
                "modulus exponent must not exceed {MAX_MODULUS_EXPONENT}"
            )));
        }

        let p = self.modulus();

        if (BigUint::from(self.d.unsigned_abs()) % &p).is_zero() {
            return Err(Error::InvalidCurveParams("d must be non-zero modulo p".into()));
        }

        if self.cofactor == 0 || !self.cofactor.is_power_of_two() {
            return Err(Error::InvalidCurveParams(
                "cofactor must be a power of two".into(),
            ));
        }

        if BigUint::from(self.base_x) >= p {
            return Err(Error::InvalidCurveParams(
                "base point x-coordinate must be below p".into(),
            ));
        }

        Ok(())
    }
}

impl Default for CurveParams {
    /// E521.
    fn default() -> Self {
        Self::E521
    }
}
