//! Authenticated encryption built on KMACXOF256.
//!
//! Both schemes share one construction: a KDF call yields `ke || ka`, `ke`
//! keys a KMAC keystream XORed with the message and `ka` keys a 512-bit tag
//! over the plaintext. They differ only in where the KDF secret comes from.
//!
//! - `symmetric`
//!   The secret is a random salt concatenated with a passphrase.
//!
//! - `ecies`
//!   The secret is the x-coordinate of a Diffie–Hellman point between an
//!   ephemeral scalar and the recipient's public key.

mod kmac_cipher;

pub mod ecies;
pub mod symmetric;

pub use kmac_cipher::TAG_LEN;
