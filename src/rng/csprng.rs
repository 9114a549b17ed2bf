//! ChaCha20-based CSPRNG
//!
//! This module provides the crate's source of randomness for salts and
//! ephemeral scalars. It:
//! - relies on the operating system for initial entropy (`OsRng`)
//! - expands that entropy with a ChaCha20 DRBG (`rand_chacha`)
//! - provides forward secrecy via rekeying after every fill
//!
//! `Csprng` implements `RngCore + CryptoRng`, so every function that takes a
//! generic RNG also accepts it.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroize;

/// Cryptographically secure pseudorandom number generator.
///
/// After every request, whether [`Csprng::fill_bytes`] or one of the
/// `RngCore` integer methods, the generator replaces its own seed with fresh
/// output, so a later compromise of the state does not
/// reveal earlier outputs.
pub struct Csprng {
    inner: ChaCha20Rng,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    ///
    /// This is equivalent to calling [`Csprng::from_os`].
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a new CSPRNG using entropy provided by the operating system.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);

        Self::from_seed(seed)
    }

    /// Creates a new CSPRNG from a caller-provided seed.
    ///
    /// Two generators built from the same seed produce the same stream,
    /// which is what deterministic tests rely on. The seed buffer is wiped
    /// once consumed.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let inner = ChaCha20Rng::from_seed(seed);
        seed.zeroize();

        Self { inner }
    }

    /// Fills the provided buffer with random bytes, then rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        self.inner.fill_bytes(out);
        self.rekey();
    }

    fn rekey(&mut self) {
        let mut seed = [0u8; 32];
        self.inner.fill_bytes(&mut seed);

        self.inner = ChaCha20Rng::from_seed(seed);
        seed.zeroize();
    }
}

impl Default for Csprng {
    /// Creates a default CSPRNG instance seeded from the operating system.
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        Csprng::fill_bytes(self, &mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        Csprng::fill_bytes(self, &mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Csprng::fill_bytes(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        Csprng::fill_bytes(self, dest);
        Ok(())
    }
}

impl CryptoRng for Csprng {}
