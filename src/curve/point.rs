//! Affine Edwards curve points and their byte encoding.
//!
//! A point is stored as two integers. Points produced by [`Curve`]
//! operations are always reduced modulo `p`; points built with
//! [`CurvePoint::new`] are taken as given and not checked against the curve
//! equation (see [`Curve::point`] for the checked form).
//!
//! # Encoding
//!
//! ```text
//! version (1 byte, 0x01) || x (L bytes) || y (L bytes)
//! ```
//!
//! where `L = ceil(bits(p) / 8)` and coordinates are unsigned big-endian,
//! left-padded with zeros. For E521, `L = 66`.
//!
//! [`Curve`]: super::Curve
//! [`Curve::point`]: super::Curve::point

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::Curve;
use crate::error::{Error, Result};

/// Version byte of the point encoding.
pub const POINT_ENCODING_VERSION: u8 = 0x01;

/// A point `(x, y)` on an Edwards curve.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurvePoint {
    x: BigUint,
    y: BigUint,
}

impl CurvePoint {
    /// Creates a point from both coordinates without validation.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// The neutral element `(0, 1)`.
    pub fn neutral() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::one(),
        }
    }

    #[inline]
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Least significant bit of `y`, the bit kept by point compression.
    #[inline]
    pub fn y_lsb(&self) -> bool {
        self.y.bit(0)
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.x.is_zero() && self.y.is_one()
    }
}

impl Curve {
    /// Appends both fixed-width coordinates of `point` to `out`.
    pub(crate) fn write_coordinates(&self, point: &CurvePoint, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.field().to_bytes(point.x()));
        out.extend_from_slice(&self.field().to_bytes(point.y()));
    }

    /// Number of bytes taken by [`Curve::write_coordinates`].
    #[inline]
    pub(crate) fn coordinates_len(&self) -> usize {
        2 * self.field().byte_len()
    }

    /// Parses exactly `coordinates_len()` bytes into a point on this curve.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedCryptogram`] if the length is wrong, a coordinate is
    /// not below `p`, or the point does not satisfy the curve equation.
    pub(crate) fn read_coordinates(&self, bytes: &[u8]) -> Result<CurvePoint> {
        if bytes.len() != self.coordinates_len() {
            return Err(Error::MalformedCryptogram(format!(
                "expected {} coordinate bytes, got {}",
                self.coordinates_len(),
                bytes.len()
            )));
        }

        let (x, y) = bytes.split_at(self.field().byte_len());
        let x = BigUint::from_bytes_be(x);
        let y = BigUint::from_bytes_be(y);

        let p = self.field().modulus();
        if &x >= p || &y >= p {
            return Err(Error::MalformedCryptogram(
                "point coordinate out of range".into(),
            ));
        }

        let point = CurvePoint::new(x, y);
        if !self.is_on_curve(&point) {
            return Err(Error::MalformedCryptogram("point is not on the curve".into()));
        }

        Ok(point)
    }

    /// Serializes a point with the versioned layout described in the module
    /// documentation.
    pub fn encode_point(&self, point: &CurvePoint) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.coordinates_len());
        out.push(POINT_ENCODING_VERSION);
        self.write_coordinates(point, &mut out);

        out
    }

    /// Parses a point serialized by [`Curve::encode_point`].
    ///
    /// # Errors
    ///
    /// [`Error::MalformedCryptogram`] on an unknown version byte, a wrong
    /// length, or a point that is not on this curve.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<CurvePoint> {
        match bytes.split_first() {
            Some((&POINT_ENCODING_VERSION, rest)) => self.read_coordinates(rest),
            Some((&version, _)) => Err(Error::MalformedCryptogram(format!(
                "unsupported point encoding version {version:#04x}"
            ))),
            None => Err(Error::MalformedCryptogram("empty point encoding".into())),
        }
    }
}
