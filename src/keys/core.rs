use std::fmt;

use num_bigint::BigUint;
use tracing::debug;
use zeroize::Zeroizing;

use crate::curve::{Curve, CurvePoint};
use crate::error::Result;
use crate::hash::sp800_185::{customization, kmacxof256_into};

/// Length in bytes of the KMAC output a secret scalar is derived from.
const SCALAR_SEED_LEN: usize = 64;

/// Derives the secret scalar `s = cofactor · KMACXOF256(pw, "", 512, "K")`.
///
/// The 64 KMAC bytes are read as an unsigned big-endian integer. Temporary
/// big integers created here are not wiped.
pub(crate) fn derive_scalar(curve: &Curve, passphrase: &[u8]) -> BigUint {
    let mut seed = Zeroizing::new([0u8; SCALAR_SEED_LEN]);
    kmacxof256_into(passphrase, b"", customization::KEYGEN, &mut seed[..]);

    curve.cofactor() * BigUint::from_bytes_be(&seed[..])
}

/// Secret scalar `s`.
///
/// `Debug` never prints the scalar.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    scalar: BigUint,
}

impl PrivateKey {
    #[inline]
    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// Public point `V = s·G`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: CurvePoint,
}

impl PublicKey {
    /// Wraps a point that is already known to be on the curve.
    pub fn from_point(point: CurvePoint) -> Self {
        Self { point }
    }

    #[inline]
    pub fn point(&self) -> &CurvePoint {
        &self.point
    }

    /// Versioned point encoding on E521.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_bytes_on(Curve::e521())
    }

    pub fn to_bytes_on(&self, curve: &Curve) -> Vec<u8> {
        curve.encode_point(&self.point)
    }

    /// Parses a public key produced by [`PublicKey::to_bytes`].
    ///
    /// # Errors
    ///
    /// [`MalformedCryptogram`](crate::Error::MalformedCryptogram) if the
    /// bytes do not encode a point on E521.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_on(Curve::e521(), bytes)
    }

    pub fn from_bytes_on(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        curve.decode_point(bytes).map(Self::from_point)
    }
}

/// A private scalar together with its public point.
#[derive(Clone, Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Derives the key pair of `passphrase` on E521.
    ///
    /// The same passphrase always yields the same key pair.
    ///
    /// ```
    /// use spongecrypt::keys::KeyPair;
    ///
    /// let a = KeyPair::from_passphrase(b"test").unwrap();
    /// let b = KeyPair::from_passphrase(b"test").unwrap();
    /// assert_eq!(a.public(), b.public());
    /// ```
    pub fn from_passphrase(passphrase: &[u8]) -> Result<Self> {
        Self::from_passphrase_on(Curve::e521(), passphrase)
    }

    /// Derives the key pair of `passphrase` on `curve`.
    pub fn from_passphrase_on(curve: &Curve, passphrase: &[u8]) -> Result<Self> {
        let scalar = derive_scalar(curve, passphrase);
        let point = curve.mul_base(&scalar)?;

        debug!(scalar_bits = scalar.bits(), "derived key pair");

        Ok(Self {
            private: PrivateKey { scalar },
            public: PublicKey { point },
        })
    }

    #[inline]
    pub fn private(&self) -> &PrivateKey {
        &self.private
    }

    #[inline]
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// Splits the pair, keeping only what the caller asks for.
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private, self.public)
    }
}
