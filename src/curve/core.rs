//! Edwards curve group operations.
//!
//! Implements point addition with the complete Edwards addition law,
//! left-to-right double-and-add scalar multiplication, and point
//! decompression from an x-coordinate and the parity of y.
//!
//! None of these operations run in constant time. Scalar multiplication
//! branches on every scalar bit and the field inverse is a variable-time
//! extended Euclid.

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;
use tracing::trace;

use super::field::Field;
use super::params::CurveParams;
use super::point::CurvePoint;
use crate::error::{Error, Result};

/// Big-endian y-coordinate of the E521 base point `(4, y)`, y even.
const E521_BASE_Y: [u8; 66] = [
    0x01, 0x1d, 0xd4, 0xb4, 0x95, 0x2f, 0x9b, 0x74, 0x1b, 0xdb, 0x15,
    0xc8, 0x06, 0xd2, 0x40, 0x13, 0xb3, 0xeb, 0xf3, 0xbe, 0x43, 0x29,
    0x59, 0x04, 0xd1, 0xe4, 0x05, 0x0b, 0x3c, 0x80, 0xf5, 0x92, 0x0a,
    0x14, 0x56, 0x16, 0xeb, 0xb4, 0x81, 0x55, 0x7d, 0x7b, 0xfa, 0x95,
    0x5c, 0xbf, 0xb1, 0xcf, 0xd4, 0xe0, 0x64, 0xb0, 0xde, 0x40, 0xf9,
    0x3e, 0x22, 0xf8, 0xbc, 0xdf, 0xb4, 0x1d, 0x00, 0x93, 0xb1, 0x0c,
];

static E521: Lazy<Curve> = Lazy::new(|| {
    let params = CurveParams::E521;
    let field = Field::new(params.modulus());
    let d = field.from_i64(params.d);
    let generator = CurvePoint::new(
        BigUint::from(params.base_x),
        BigUint::from_bytes_be(&E521_BASE_Y),
    );

    Curve {
        params,
        field,
        d,
        generator,
    }
});

/// An Edwards curve `x² + y² = 1 + d·x²·y²` over `F_p` with a fixed base
/// point.
#[derive(Clone, Debug)]
pub struct Curve {
    params: CurveParams,
    field: Field,
    /// `d mod p`.
    d: BigUint,
    generator: CurvePoint,
}

impl Curve {
    /// Builds a curve from validated parameters.
    ///
    /// The base point is recovered by decompressing `params.base_x` with an
    /// even y-coordinate.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCurveParams`] if validation fails
    /// - [`Error::NoSquareRoot`] if no base point exists for `base_x`
    pub fn new(params: CurveParams) -> Result<Self> {
        params.validate()?;

        let field = Field::new(params.modulus());
        let d = field.from_i64(params.d);

        let mut curve = Self {
            params,
            field,
            d,
            generator: CurvePoint::neutral(),
        };

        let base_x = BigUint::from(curve.params.base_x);
        curve.generator = curve.decompress(&base_x, false)?;

        trace!(
            modulus_exponent = curve.params.modulus_exponent,
            d = curve.params.d,
            "curve constructed"
        );

        Ok(curve)
    }

    /// The E521 curve, built once per process.
    pub fn e521() -> &'static Curve {
        &E521
    }

    #[inline]
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    #[inline]
    pub(crate) fn field(&self) -> &Field {
        &self.field
    }

    /// Field modulus `p`.
    #[inline]
    pub fn modulus(&self) -> &BigUint {
        self.field.modulus()
    }

    /// Base point `G`.
    #[inline]
    pub fn generator(&self) -> &CurvePoint {
        &self.generator
    }

    /// Cofactor as an integer.
    pub fn cofactor(&self) -> BigUint {
        BigUint::from(self.params.cofactor)
    }

    /// Neutral element `(0, 1)`.
    pub fn neutral(&self) -> CurvePoint {
        CurvePoint::neutral()
    }

    /// Creates a point from both coordinates, checking the curve equation.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedCryptogram`] if a coordinate is not below `p` or the
    /// point is not on the curve.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<CurvePoint> {
        let point = CurvePoint::new(x, y);

        if !self.is_on_curve(&point) {
            return Err(Error::MalformedCryptogram("point is not on the curve".into()));
        }

        Ok(point)
    }

    /// Whether `point` has reduced coordinates satisfying the curve equation.
    pub fn is_on_curve(&self, point: &CurvePoint) -> bool {
        let f = &self.field;
        let (x, y) = (point.x(), point.y());

        if x >= f.modulus() || y >= f.modulus() {
            return false;
        }

        let x2 = f.square(x);
        let y2 = f.square(y);

        let lhs = f.add(&x2, &y2);
        let rhs = f.add(&BigUint::one(), &f.mul(&self.d, &f.mul(&x2, &y2)));

        lhs == rhs
    }

    /// Adds two points with the Edwards addition law:
    ///
    /// ```text
    /// x3 = (x1·y2 + y1·x2) / (1 + d·x1·x2·y1·y2)
    /// y3 = (y1·y2 − x1·x2) / (1 − d·x1·x2·y1·y2)
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::NonInvertible`] if a denominator has no inverse, which does
    /// not happen for points on a curve over a prime field.
    pub fn add(&self, p1: &CurvePoint, p2: &CurvePoint) -> Result<CurvePoint> {
        let f = &self.field;
        let (x1, y1) = (p1.x(), p1.y());
        let (x2, y2) = (p2.x(), p2.y());

        let x1x2 = f.mul(x1, x2);
        let y1y2 = f.mul(y1, y2);
        let t = f.mul(&self.d, &f.mul(&x1x2, &y1y2));

        let x_num = f.add(&f.mul(x1, y2), &f.mul(y1, x2));
        let y_num = f.sub(&y1y2, &x1x2);

        let x_den = f.inv(&f.add(&BigUint::one(), &t)).ok_or(Error::NonInvertible)?;
        let y_den = f.inv(&f.sub(&BigUint::one(), &t)).ok_or(Error::NonInvertible)?;

        Ok(CurvePoint::new(f.mul(&x_num, &x_den), f.mul(&y_num, &y_den)))
    }

    /// The opposite of `(x, y)`, which is `(−x, y)`.
    pub fn negate(&self, point: &CurvePoint) -> CurvePoint {
        CurvePoint::new(self.field.neg(point.x()), self.field.reduce(point.y()))
    }

    /// Computes `s·point` by left-to-right double-and-add.
    ///
    /// Runs one iteration per bit of `s`, starting from the most significant
    /// bit, so `0·P` is the neutral element and `1·P` is `P`.
    pub fn mul(&self, s: &BigUint, point: &CurvePoint) -> Result<CurvePoint> {
        let mut acc = self.neutral();

        for i in (0..s.bits()).rev() {
            acc = self.add(&acc, &acc)?;

            if s.bit(i) {
                acc = self.add(&acc, point)?;
            }
        }

        Ok(acc)
    }

    /// Computes `s·G`.
    pub fn mul_base(&self, s: &BigUint) -> Result<CurvePoint> {
        self.mul(s, &self.generator)
    }

    /// Recovers the point with x-coordinate `x` whose y-coordinate has least
    /// significant bit `lsb`.
    ///
    /// Solves `y² = (1 − x²) / (1 − d·x²)` with the field square root.
    ///
    /// # Errors
    ///
    /// [`Error::NoSquareRoot`] if no such point exists.
    pub fn decompress(&self, x: &BigUint, lsb: bool) -> Result<CurvePoint> {
        let f = &self.field;
        let x = f.reduce(x);
        let x2 = f.square(&x);

        let numerator = f.sub(&BigUint::one(), &x2);
        let denominator = f.sub(&BigUint::one(), &f.mul(&self.d, &x2));
        let denominator = f.inv(&denominator).ok_or(Error::NoSquareRoot)?;

        let y2 = f.mul(&numerator, &denominator);
        let y = f.sqrt(&y2, lsb).ok_or(Error::NoSquareRoot)?;

        Ok(CurvePoint::new(x, y))
    }
}
