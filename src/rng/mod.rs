//! Random number generation module
//!
//! Salts for symmetric encryption and ephemeral scalars for public-key
//! encryption are drawn from here. The generator is a ChaCha20 DRBG seeded
//! from the operating system and rekeyed after every request.
mod csprng;

/// Cryptographically secure pseudorandom number generator.
///
/// This type is the default randomness source of every encryption function
/// in the crate.
pub use csprng::Csprng;
