//! SP 800-185 integer and string encodings.
//!
//! These encoders make the function-name, customization and key inputs of
//! cSHAKE and KMAC unambiguously parseable, which is what gives the derived
//! functions their domain separation.

use std::num::NonZeroUsize;

use crate::error::{Error, Result};

/// Maximum encoded size of a `u64`: one length byte and eight value bytes.
const MAX_ENCODED_LEN: usize = 9;

/// A self-delimiting integer encoding produced by [`left_encode`] or
/// [`right_encode`].
///
/// The value is immutable and lives on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodedInteger {
    bytes: [u8; MAX_ENCODED_LEN],
    len: usize,
}

impl EncodedInteger {
    /// Number of encoded bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: every encoding carries at least a length byte and one
    /// value byte.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Encoded bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl AsRef<[u8]> for EncodedInteger {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Number of bytes needed for `x` in big-endian, never less than one.
#[inline]
fn byte_len(x: u64) -> usize {
    let bits = 64 - x.leading_zeros() as usize;
    bits.div_ceil(8).max(1)
}

/// Encodes `x` as `[n] || big-endian(x, n)` with the smallest `n >= 1`.
///
/// `left_encode(0)` is `[0x01, 0x00]`.
pub fn left_encode(x: u64) -> EncodedInteger {
    let n = byte_len(x);
    let be = x.to_be_bytes();

    let mut bytes = [0u8; MAX_ENCODED_LEN];
    bytes[0] = n as u8;
    bytes[1..=n].copy_from_slice(&be[8 - n..]);

    EncodedInteger { bytes, len: n + 1 }
}

/// Encodes `x` as `big-endian(x, n) || [n]` with the smallest `n >= 1`.
///
/// `right_encode(0)` is `[0x00, 0x01]`.
pub fn right_encode(x: u64) -> EncodedInteger {
    let n = byte_len(x);
    let be = x.to_be_bytes();

    let mut bytes = [0u8; MAX_ENCODED_LEN];
    bytes[..n].copy_from_slice(&be[8 - n..]);
    bytes[n] = n as u8;

    EncodedInteger { bytes, len: n + 1 }
}

/// Encodes `s` as `left_encode(bit_length(s)) || s`.
pub fn encode_string(s: &[u8]) -> Vec<u8> {
    let prefix = left_encode((s.len() as u64) * 8);

    let mut out = Vec::with_capacity(prefix.len() + s.len());
    out.extend_from_slice(prefix.as_bytes());
    out.extend_from_slice(s);

    out
}

/// Prepends `left_encode(w)` to `x` and zero-pads the result to a multiple
/// of `w` bytes.
///
/// # Errors
///
/// [`Error::InvalidEncodingInput`] if `w` is zero.
pub fn bytepad(x: &[u8], w: usize) -> Result<Vec<u8>> {
    let w = NonZeroUsize::new(w)
        .ok_or_else(|| Error::InvalidEncodingInput("bytepad width must be positive".into()))?;

    Ok(bytepad_nonzero(x, w))
}

pub(crate) fn bytepad_nonzero(x: &[u8], w: NonZeroUsize) -> Vec<u8> {
    let w = w.get();
    let prefix = left_encode(w as u64);

    let total = (prefix.len() + x.len()).div_ceil(w) * w;

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(prefix.as_bytes());
    out.extend_from_slice(x);
    out.resize(total, 0);

    out
}
