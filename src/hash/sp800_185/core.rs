//! cSHAKE256 and KMACXOF256 (NIST SP 800-185).
//!
//! [`cshake256`] and [`kmacxof256`] are the literal one-shot definitions
//! and take the output length in bits. [`KmacXof256`] computes the same
//! function incrementally, so arbitrarily large inputs can be authenticated
//! with bounded memory. [`kmacxof256_into`] is the byte-length form the
//! encryption schemes use.

use std::num::NonZeroUsize;

use zeroize::Zeroizing;

use super::encoding::{bytepad_nonzero, encode_string, right_encode};
use crate::error::{Error, Result};
use crate::hash::keccak::{RATE, Sponge, XofReader};

/// Function name absorbed by every KMAC invocation.
const KMAC_FUNCTION_NAME: &[u8] = b"KMAC";

const RATE_NZ: NonZeroUsize = match NonZeroUsize::new(RATE) {
    Some(rate) => rate,
    None => panic!("sponge rate must be positive"),
};

/// Converts a bit length into a byte length, rejecting partial bytes.
fn output_len(l_bits: usize) -> Result<usize> {
    if l_bits % 8 != 0 {
        return Err(Error::InvalidEncodingInput(format!(
            "output length {l_bits} is not a multiple of 8 bits"
        )));
    }

    Ok(l_bits / 8)
}

/// Absorbs `bytepad(encode_string(n) || encode_string(s), 136)`.
fn absorb_cshake_prefix(sponge: &mut Sponge, n: &[u8], s: &[u8]) {
    let mut names = encode_string(n);
    names.extend_from_slice(&encode_string(s));

    sponge.absorb(&bytepad_nonzero(&names, RATE_NZ));
}

/// Customizable SHAKE256.
///
/// When both `n` and `s` are empty this is exactly SHAKE256(`x`, `l_bits`).
///
/// # Errors
///
/// [`Error::InvalidEncodingInput`] if `l_bits` is not a multiple of 8.
pub fn cshake256(x: &[u8], l_bits: usize, n: &[u8], s: &[u8]) -> Result<Vec<u8>> {
    let len = output_len(l_bits)?;
    let mut sponge = Sponge::new();

    if n.is_empty() && s.is_empty() {
        sponge.absorb(x);
        return Ok(sponge.finalize_shake().squeeze_vec(len));
    }

    absorb_cshake_prefix(&mut sponge, n, s);
    sponge.absorb(x);

    Ok(sponge.finalize_cshake().squeeze_vec(len))
}

/// KMAC with arbitrary-length output.
///
/// Computes `cSHAKE256(bytepad(encode_string(k), 136) || x || right_encode(0),
/// l_bits, "KMAC", s)`.
///
/// # Errors
///
/// [`Error::InvalidEncodingInput`] if `l_bits` is not a multiple of 8.
pub fn kmacxof256(k: &[u8], x: &[u8], l_bits: usize, s: &[u8]) -> Result<Vec<u8>> {
    let encoded_key = Zeroizing::new(encode_string(k));
    let padded_key = Zeroizing::new(bytepad_nonzero(&encoded_key, RATE_NZ));
    let suffix = right_encode(0);

    let capacity = padded_key.len() + x.len() + suffix.len();
    let mut new_x = Zeroizing::new(Vec::with_capacity(capacity));
    new_x.extend_from_slice(&padded_key);
    new_x.extend_from_slice(x);
    new_x.extend_from_slice(suffix.as_bytes());

    cshake256(&new_x, l_bits, KMAC_FUNCTION_NAME, s)
}

/// Fills `out` with KMACXOF256(`k`, `x`, `8 * out.len()`, `s`).
pub fn kmacxof256_into(k: &[u8], x: &[u8], s: &[u8], out: &mut [u8]) {
    let mut mac = KmacXof256::new(k, s);
    mac.update(x);
    mac.finalize_into(out);
}

/// Incremental KMACXOF256.
///
/// ```
/// use spongecrypt::hash::sp800_185::{KmacXof256, kmacxof256};
///
/// let mut mac = KmacXof256::new(b"key", b"S");
/// mac.update(b"hello ");
/// mac.update(b"world");
///
/// assert_eq!(mac.finalize(64), kmacxof256(b"key", b"hello world", 512, b"S").unwrap());
/// ```
#[derive(Clone)]
pub struct KmacXof256 {
    sponge: Sponge,
}

impl KmacXof256 {
    /// Starts a KMAC computation keyed with `key` under customization `s`.
    pub fn new(key: &[u8], s: &[u8]) -> Self {
        let mut sponge = Sponge::new();
        absorb_cshake_prefix(&mut sponge, KMAC_FUNCTION_NAME, s);

        let encoded_key = Zeroizing::new(encode_string(key));
        let padded_key = Zeroizing::new(bytepad_nonzero(&encoded_key, RATE_NZ));
        sponge.absorb(&padded_key);

        Self { sponge }
    }

    /// Absorbs more message bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    /// Closes the message and returns the output stream.
    pub fn finalize_xof(mut self) -> XofReader {
        self.sponge.absorb(right_encode(0).as_bytes());
        self.sponge.finalize_cshake()
    }

    /// Closes the message and fills `out` with output.
    pub fn finalize_into(self, out: &mut [u8]) {
        self.finalize_xof().squeeze(out);
    }

    /// Closes the message and returns `len` bytes of output.
    pub fn finalize(self, len: usize) -> Vec<u8> {
        self.finalize_xof().squeeze_vec(len)
    }
}
