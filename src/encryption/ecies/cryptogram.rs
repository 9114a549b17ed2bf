//! Byte layout of an elliptic curve cryptogram.
//!
//! ```text
//! version (0x01) || Z.x (L bytes) || Z.y (L bytes) || c || t (64 bytes)
//! ```
//!
//! `L` is the coordinate width of the curve (66 bytes on E521).

use crate::curve::{Curve, CurvePoint, POINT_ENCODING_VERSION};
use crate::encryption::TAG_LEN;
use crate::error::{Error, Result};

/// Output of public-key encryption: ephemeral point, ciphertext and tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EllipticCurveCryptogram {
    pub(crate) z: CurvePoint,
    pub(crate) c: Vec<u8>,
    pub(crate) t: [u8; TAG_LEN],
}

impl EllipticCurveCryptogram {
    pub fn new(z: CurvePoint, c: Vec<u8>, t: [u8; TAG_LEN]) -> Self {
        Self { z, c, t }
    }

    /// Ephemeral point `Z = k·G`.
    #[inline]
    pub fn z(&self) -> &CurvePoint {
        &self.z
    }

    #[inline]
    pub fn c(&self) -> &[u8] {
        &self.c
    }

    #[inline]
    pub fn t(&self) -> &[u8; TAG_LEN] {
        &self.t
    }

    /// Serializes for E521.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_bytes_on(Curve::e521())
    }

    pub fn to_bytes_on(&self, curve: &Curve) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + curve.coordinates_len() + self.c.len() + TAG_LEN);
        out.push(POINT_ENCODING_VERSION);
        curve.write_coordinates(&self.z, &mut out);
        out.extend_from_slice(&self.c);
        out.extend_from_slice(&self.t);
        out
    }

    /// Parses an E521 cryptogram.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_on(Curve::e521(), bytes)
    }

    /// Parses a cryptogram for `curve`.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedCryptogram`] on an unknown version, input shorter
    /// than the fixed-size parts, or an ephemeral point that is not on
    /// `curve`.
    pub fn from_bytes_on(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let point_len = curve.coordinates_len();
        let min_len = 1 + point_len + TAG_LEN;

        if bytes.len() < min_len {
            return Err(Error::MalformedCryptogram(format!(
                "elliptic curve cryptogram needs at least {min_len} bytes, got {}",
                bytes.len()
            )));
        }

        let (version, rest) = (bytes[0], &bytes[1..]);
        if version != POINT_ENCODING_VERSION {
            return Err(Error::MalformedCryptogram(format!(
                "unsupported cryptogram version {version:#04x}"
            )));
        }

        let (coordinates, rest) = rest.split_at(point_len);
        let (c, t) = rest.split_at(rest.len() - TAG_LEN);

        let z = curve.read_coordinates(coordinates)?;
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(t);

        Ok(Self::new(z, c.to_vec(), tag))
    }
}
