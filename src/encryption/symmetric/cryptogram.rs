//! Byte layout of a symmetric cryptogram.
//!
//! ```text
//! z (64 bytes) || c (|m| bytes) || t (64 bytes)
//! ```
//!
//! There is no version byte and no length prefix: the ciphertext is whatever
//! lies between the salt and the tag.

use crate::encryption::TAG_LEN;
use crate::error::{Error, Result};

/// Length of the random salt `z` in bytes.
pub const SALT_LEN: usize = 64;

/// Output of passphrase-based encryption: salt, ciphertext and tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymmetricCryptogram {
    pub(crate) z: [u8; SALT_LEN],
    pub(crate) c: Vec<u8>,
    pub(crate) t: [u8; TAG_LEN],
}

impl SymmetricCryptogram {
    /// Assembles a cryptogram from its parts.
    pub fn new(z: [u8; SALT_LEN], c: Vec<u8>, t: [u8; TAG_LEN]) -> Self {
        Self { z, c, t }
    }

    /// Random salt.
    #[inline]
    pub fn z(&self) -> &[u8; SALT_LEN] {
        &self.z
    }

    /// Ciphertext, as long as the plaintext.
    #[inline]
    pub fn c(&self) -> &[u8] {
        &self.c
    }

    /// Authentication tag.
    #[inline]
    pub fn t(&self) -> &[u8; TAG_LEN] {
        &self.t
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SALT_LEN + self.c.len() + TAG_LEN);
        out.extend_from_slice(&self.z);
        out.extend_from_slice(&self.c);
        out.extend_from_slice(&self.t);
        out
    }

    /// Parses the layout written by [`SymmetricCryptogram::to_bytes`].
    ///
    /// # Errors
    ///
    /// [`Error::MalformedCryptogram`] if `bytes` is shorter than the salt and
    /// tag together.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < SALT_LEN + TAG_LEN {
            return Err(Error::MalformedCryptogram(format!(
                "symmetric cryptogram needs at least {} bytes, got {}",
                SALT_LEN + TAG_LEN,
                bytes.len()
            )));
        }

        let (z, rest) = bytes.split_at(SALT_LEN);
        let (c, t) = rest.split_at(rest.len() - TAG_LEN);

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(z);
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(t);

        Ok(Self::new(salt, c.to_vec(), tag))
    }
}
