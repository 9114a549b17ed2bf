//! Edwards curve arithmetic over a Mersenne prime field.
//!
//! The default curve is E521: `x² + y² = 1 − 376014·x²·y²` over
//! `p = 2^521 − 1`, cofactor 4, base point `G = (4, y)` with `y` even.
//!
//! The modulus exponent is a parameter of [`CurveParams`]. Exponents other
//! than 521 are accepted by validation but usually fail to produce a base
//! point: `2^251 − 1` is composite and [`Curve::new`] rejects it with
//! [`NoSquareRoot`](crate::Error::NoSquareRoot).
//!
//! ## Structure
//!
//! - `params`: curve configuration and validation
//! - `field`: arithmetic modulo `p` on arbitrary-precision integers
//! - `point`: the affine point type and its versioned byte encoding
//! - `core`: addition, scalar multiplication and decompression

mod core;
mod field;
mod params;
mod point;

pub use self::core::Curve;
pub use field::Field;
pub use params::CurveParams;
pub use point::{CurvePoint, POINT_ENCODING_VERSION};
