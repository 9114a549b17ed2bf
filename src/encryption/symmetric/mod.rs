//! Symmetric authenticated encryption under a passphrase.
//!
//! ## Structure
//!
//! - `core`
//!   Key derivation, encryption and authenticated decryption.
//!
//! - `cryptogram`
//!   The `(z, c, t)` triple and its byte layout.

mod core;
mod cryptogram;

pub use self::core::{decrypt, encrypt, encrypt_with_rng};
pub use cryptogram::{SALT_LEN, SymmetricCryptogram};
