//! Elliptic curve integrated encryption to a passphrase-derived public key.
//!
//! Anyone holding the public key `V` can encrypt. Decryption only needs the
//! passphrase `V` was derived from (see [`crate::keys`]).
//!
//! ```no_run
//! use spongecrypt::encryption::ecies;
//! use spongecrypt::keys::KeyPair;
//!
//! let pair = KeyPair::from_passphrase(b"passphrase").unwrap();
//! let cryptogram = ecies::encrypt(b"message", pair.public()).unwrap();
//!
//! assert_eq!(ecies::decrypt(&cryptogram, b"passphrase").unwrap(), b"message");
//! ```

mod core;
mod cryptogram;

pub use self::core::{decrypt, decrypt_on, encrypt, encrypt_on, encrypt_with_rng};
pub use cryptogram::EllipticCurveCryptogram;
