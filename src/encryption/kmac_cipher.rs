//! KMAC-based stream cipher and tag shared by both encryption schemes.
//!
//! Given 128 bytes of key material split into `ke || ka`:
//!
//! ```text
//! c = KMACXOF256(ke, "", 8·|m|, enc_custom) ⊕ m
//! t = KMACXOF256(ka, m, 512, auth_custom)
//! ```
//!
//! The tag covers the plaintext, so decryption must recover `m` before it
//! can verify anything. Callers wipe the recovered buffer when verification
//! fails.

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::hash::sp800_185::kmacxof256_into;

/// Length of the authentication tag in bytes.
pub const TAG_LEN: usize = 64;

/// Length of each derived key half in bytes.
const KEY_HALF_LEN: usize = 64;

/// Encryption and authentication keys derived from one KDF call.
pub(crate) struct SessionKeys {
    material: Zeroizing<[u8; 2 * KEY_HALF_LEN]>,
}

impl SessionKeys {
    /// `ke || ka = KMACXOF256(secret, "", 1024, custom)`.
    pub(crate) fn derive(secret: &[u8], custom: &[u8]) -> Self {
        let mut material = Zeroizing::new([0u8; 2 * KEY_HALF_LEN]);
        kmacxof256_into(secret, b"", custom, &mut material[..]);

        Self { material }
    }

    #[inline]
    fn ke(&self) -> &[u8] {
        &self.material[..KEY_HALF_LEN]
    }

    #[inline]
    fn ka(&self) -> &[u8] {
        &self.material[KEY_HALF_LEN..]
    }

    /// XORs `data` in place with the keystream for `ke`.
    pub(crate) fn apply_keystream(&self, custom: &[u8], data: &mut [u8]) {
        let mut keystream = Zeroizing::new(vec![0u8; data.len()]);
        kmacxof256_into(self.ke(), b"", custom, &mut keystream);

        for (byte, k) in data.iter_mut().zip(keystream.iter()) {
            *byte ^= k;
        }
    }

    /// Tag over the plaintext `m`.
    pub(crate) fn tag(&self, custom: &[u8], m: &[u8]) -> [u8; TAG_LEN] {
        let mut t = [0u8; TAG_LEN];
        kmacxof256_into(self.ka(), m, custom, &mut t);
        t
    }

    /// Recomputes the tag of `m` and compares it with `expected` in
    /// constant time.
    pub(crate) fn verify(&self, custom: &[u8], m: &[u8], expected: &[u8; TAG_LEN]) -> bool {
        let t = self.tag(custom, m);
        t[..].ct_eq(&expected[..]).into()
    }
}
