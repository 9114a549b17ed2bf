//! Passphrase-based authenticated encryption.
//!
//! ## Algorithm
//!
//! Encryption of `m` under passphrase `pw`:
//!
//! 1. Draw a random 64-byte salt `z`
//! 2. `ke || ka = KMACXOF256(z || pw, "", 1024, "S")`
//! 3. `c = KMACXOF256(ke, "", 8·|m|, "SKE") ⊕ m`
//! 4. `t = KMACXOF256(ka, m, 512, "SKA")`
//!
//! Decryption repeats steps 2 and 3 with the stored salt, then recomputes the
//! tag over the recovered plaintext and compares it with the stored one.

use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

use super::cryptogram::{SALT_LEN, SymmetricCryptogram};
use crate::encryption::kmac_cipher::SessionKeys;
use crate::error::{Error, Result};
use crate::hash::sp800_185::customization;
use crate::rng::Csprng;

fn session_keys(z: &[u8; SALT_LEN], passphrase: &[u8]) -> SessionKeys {
    let mut secret = Zeroizing::new(Vec::with_capacity(SALT_LEN + passphrase.len()));
    secret.extend_from_slice(z);
    secret.extend_from_slice(passphrase);

    SessionKeys::derive(&secret, customization::SYMMETRIC_KDF)
}

/// Encrypts `m` under `passphrase` with a fresh OS-seeded salt.
pub fn encrypt(m: &[u8], passphrase: &[u8]) -> SymmetricCryptogram {
    encrypt_with_rng(m, passphrase, &mut Csprng::new())
}

/// Encrypts `m` under `passphrase`, drawing the salt from `rng`.
pub fn encrypt_with_rng<R>(m: &[u8], passphrase: &[u8], rng: &mut R) -> SymmetricCryptogram
where
    R: RngCore + CryptoRng,
{
    let mut z = [0u8; SALT_LEN];
    rng.fill_bytes(&mut z);

    let keys = session_keys(&z, passphrase);

    let mut c = m.to_vec();
    keys.apply_keystream(customization::SYMMETRIC_ENCRYPT, &mut c);
    let t = keys.tag(customization::SYMMETRIC_AUTH, m);

    debug!(len = m.len(), "symmetric encryption");

    SymmetricCryptogram::new(z, c, t)
}

/// Decrypts and authenticates `cryptogram` under `passphrase`.
///
/// # Errors
///
/// [`Error::AuthenticationFailure`] if the passphrase is wrong or any part of
/// the cryptogram was altered. No plaintext is returned in that case.
pub fn decrypt(cryptogram: &SymmetricCryptogram, passphrase: &[u8]) -> Result<Vec<u8>> {
    let keys = session_keys(cryptogram.z(), passphrase);

    let mut m = cryptogram.c().to_vec();
    keys.apply_keystream(customization::SYMMETRIC_ENCRYPT, &mut m);

    if !keys.verify(customization::SYMMETRIC_AUTH, &m, cryptogram.t()) {
        m.zeroize();
        warn!(len = cryptogram.c().len(), "symmetric authentication failed");
        return Err(Error::AuthenticationFailure);
    }

    debug!(len = m.len(), "symmetric decryption");

    Ok(m)
}
