//! Public-key encryption to a passphrase-derived key.
//!
//! ## Algorithm
//!
//! Encryption of `m` to public key `V`:
//!
//! 1. Draw a random 512-bit `k` and set `k ← cofactor · k`
//! 2. `W = k·V`, `Z = k·G`
//! 3. `ke || ka = KMACXOF256(W.x, "", 1024, "P")`
//! 4. `c = KMACXOF256(ke, "", 8·|m|, "PKE") ⊕ m`
//! 5. `t = KMACXOF256(ka, m, 512, "PKA")`
//!
//! Decryption rederives `s` from the passphrase and computes `W = s·Z`,
//! which equals `k·V` because `V = s·G`.
//!
//! `W.x` enters the KDF as its minimal two's-complement big-endian encoding:
//! a leading zero byte is present whenever the top bit of the first
//! magnitude byte is set.
//!
//! ## Security
//!
//! Scalar multiplication is not constant time. Only the tag comparison is.

use num_bigint::{BigInt, BigUint, Sign};
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

use super::cryptogram::EllipticCurveCryptogram;
use crate::curve::{Curve, CurvePoint};
use crate::encryption::kmac_cipher::SessionKeys;
use crate::error::{Error, Result};
use crate::hash::sp800_185::customization;
use crate::keys::{PublicKey, derive_scalar};
use crate::rng::Csprng;

/// Bytes of randomness drawn for the ephemeral scalar.
const EPHEMERAL_SCALAR_LEN: usize = 64;

fn session_keys(w: &CurvePoint) -> SessionKeys {
    let wx = Zeroizing::new(BigInt::from_biguint(Sign::Plus, w.x().clone()).to_signed_bytes_be());
    SessionKeys::derive(&wx, customization::PUBLIC_KDF)
}

/// Encrypts `m` to `public` on E521 with an OS-seeded ephemeral scalar.
pub fn encrypt(m: &[u8], public: &PublicKey) -> Result<EllipticCurveCryptogram> {
    encrypt_on(Curve::e521(), m, public, &mut Csprng::new())
}

/// Encrypts `m` to `public` on E521, drawing the ephemeral scalar from `rng`.
pub fn encrypt_with_rng<R>(m: &[u8], public: &PublicKey, rng: &mut R) -> Result<EllipticCurveCryptogram>
where
    R: RngCore + CryptoRng,
{
    encrypt_on(Curve::e521(), m, public, rng)
}

/// Encrypts `m` to `public` on `curve`.
///
/// # Errors
///
/// [`Error::NonInvertible`] if point arithmetic fails, which only happens
/// when `public` is not on `curve`.
pub fn encrypt_on<R>(
    curve: &Curve,
    m: &[u8],
    public: &PublicKey,
    rng: &mut R,
) -> Result<EllipticCurveCryptogram>
where
    R: RngCore + CryptoRng,
{
    let mut seed = Zeroizing::new([0u8; EPHEMERAL_SCALAR_LEN]);
    rng.fill_bytes(&mut seed[..]);
    let k = curve.cofactor() * BigUint::from_bytes_be(&seed[..]);

    let w = curve.mul(&k, public.point())?;
    let z = curve.mul_base(&k)?;

    let keys = session_keys(&w);

    let mut c = m.to_vec();
    keys.apply_keystream(customization::PUBLIC_ENCRYPT, &mut c);
    let t = keys.tag(customization::PUBLIC_AUTH, m);

    debug!(len = m.len(), "elliptic curve encryption");

    Ok(EllipticCurveCryptogram::new(z, c, t))
}

/// Decrypts an E521 cryptogram with the key pair of `passphrase`.
pub fn decrypt(cryptogram: &EllipticCurveCryptogram, passphrase: &[u8]) -> Result<Vec<u8>> {
    decrypt_on(Curve::e521(), cryptogram, passphrase)
}

/// Decrypts a cryptogram for `curve` with the key pair of `passphrase`.
///
/// # Errors
///
/// [`Error::AuthenticationFailure`] if the passphrase does not match the
/// recipient key or the cryptogram was altered.
pub fn decrypt_on(curve: &Curve, cryptogram: &EllipticCurveCryptogram, passphrase: &[u8]) -> Result<Vec<u8>> {
    let s = derive_scalar(curve, passphrase);
    let w = curve.mul(&s, cryptogram.z())?;

    let keys = session_keys(&w);

    let mut m = cryptogram.c().to_vec();
    keys.apply_keystream(customization::PUBLIC_ENCRYPT, &mut m);

    if !keys.verify(customization::PUBLIC_AUTH, &m, cryptogram.t()) {
        m.zeroize();
        warn!(len = cryptogram.c().len(), "elliptic curve authentication failed");
        return Err(Error::AuthenticationFailure);
    }

    debug!(len = m.len(), "elliptic curve decryption");

    Ok(m)
}
