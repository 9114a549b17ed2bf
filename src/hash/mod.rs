//! Hash algorithms exposed by the crate.
//!
//! Currently includes the Keccak-f[1600] sponge (SHA3-256, SHAKE256) and
//! the SP 800-185 functions built on it (cSHAKE256, KMACXOF256).

pub mod keccak;
pub mod sp800_185;

/// Re-export of the one-shot convenience functions.
pub use keccak::{sha3_256, shake256};
pub use sp800_185::{cshake256, kmacxof256};
