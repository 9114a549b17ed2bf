//! Passphrase-derived Edwards curve key pairs.
//!
//! A key pair is a deterministic function of its passphrase:
//!
//! ```text
//! s = cofactor · KMACXOF256(passphrase, "", 512, "K")
//! V = s · G
//! ```
//!
//! Nothing but the passphrase needs to be stored to recover the private
//! scalar. Public keys serialize with the versioned point encoding of
//! [`crate::curve`].
//!
//! ## Structure
//!
//! - `core`
//!   Key types and scalar derivation.

mod core;

pub(crate) use self::core::derive_scalar;
pub use self::core::{KeyPair, PrivateKey, PublicKey};
