//! Byte-level services over E521.
//!
//! Each function takes and returns plain bytes or hex strings, so that a
//! front end (a CLI, a file picker) only has to move data around. Hashes and
//! tags are uppercase hex with two digits per byte.
//!
//! | Service | Output |
//! |---|---|
//! | [`compute_hash`] | `KMACXOF256("", m, 512, "D")` |
//! | [`compute_tag`] | `KMACXOF256(pw, m, 512, "T")` |
//! | [`symmetric_encrypt`] | `z \|\| c \|\| t` |
//! | [`keygen`] | versioned public point |
//! | [`ec_encrypt`] | versioned `Z \|\| c \|\| t` |

use std::io::{ErrorKind, Read};

use crate::encryption::{TAG_LEN, ecies, symmetric};
use crate::error::Result;
use crate::hash::sp800_185::{KmacXof256, customization, kmacxof256_into};
use crate::keys::{KeyPair, PublicKey};

/// Read size used by [`compute_hash_reader`].
const READ_CHUNK_LEN: usize = 8 * 1024;

/// Plain cryptographic hash of `m`.
pub fn compute_hash(m: &[u8]) -> String {
    let mut digest = [0u8; TAG_LEN];
    kmacxof256_into(b"", m, customization::HASH, &mut digest);
    hex::encode_upper(digest)
}

/// Plain cryptographic hash of everything `reader` yields.
///
/// Reads in fixed-size chunks, so memory use does not depend on the input
/// length. The result equals [`compute_hash`] over the concatenated input.
///
/// # Errors
///
/// [`Error::Io`](crate::Error::Io) if reading fails.
pub fn compute_hash_reader<R: Read>(mut reader: R) -> Result<String> {
    let mut mac = KmacXof256::new(b"", customization::HASH);
    let mut buf = [0u8; READ_CHUNK_LEN];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => mac.update(&buf[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    let mut digest = [0u8; TAG_LEN];
    mac.finalize_into(&mut digest);

    Ok(hex::encode_upper(digest))
}

/// Authentication tag of `m` under `passphrase`.
pub fn compute_tag(m: &[u8], passphrase: &[u8]) -> String {
    let mut tag = [0u8; TAG_LEN];
    kmacxof256_into(passphrase, m, customization::TAG, &mut tag);
    hex::encode_upper(tag)
}

/// Encrypts `m` under `passphrase` and serializes the cryptogram.
pub fn symmetric_encrypt(m: &[u8], passphrase: &[u8]) -> Vec<u8> {
    symmetric::encrypt(m, passphrase).to_bytes()
}

/// Parses and decrypts a cryptogram from [`symmetric_encrypt`].
pub fn symmetric_decrypt(cryptogram: &[u8], passphrase: &[u8]) -> Result<Vec<u8>> {
    let cryptogram = symmetric::SymmetricCryptogram::from_bytes(cryptogram)?;
    symmetric::decrypt(&cryptogram, passphrase)
}

/// Public key bytes derived from `passphrase`.
pub fn keygen(passphrase: &[u8]) -> Result<Vec<u8>> {
    Ok(KeyPair::from_passphrase(passphrase)?.public().to_bytes())
}

/// Encrypts `m` to the public key bytes produced by [`keygen`].
pub fn ec_encrypt(m: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
    let public = PublicKey::from_bytes(public_key)?;
    Ok(ecies::encrypt(m, &public)?.to_bytes())
}

/// Parses and decrypts a cryptogram from [`ec_encrypt`].
pub fn ec_decrypt(cryptogram: &[u8], passphrase: &[u8]) -> Result<Vec<u8>> {
    let cryptogram = ecies::EllipticCurveCryptogram::from_bytes(cryptogram)?;
    ecies::decrypt(&cryptogram, passphrase)
}
