//! Keccak sponge core.
//!
//! The sponge is split into two types so that its lifecycle is checked by
//! the compiler rather than by caller discipline:
//!
//! - [`Sponge`] is the absorbing side (EMPTY and ABSORBING states)
//! - [`XofReader`] is the squeezing side (SQUEEZING state)
//!
//! Finalizing consumes a `Sponge` and yields an `XofReader`. Resetting
//! consumes either and yields a fresh, zeroed `Sponge`. An instance can
//! therefore never be reused for an unrelated computation by accident.
//!
//! Both types wipe their state buffer when dropped.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::computations::keccakf;
use super::{RATE, WIDTH};

/// Domain-separation suffix for SHA-3.
const SHA3_SUFFIX: u8 = 0x06;

/// Domain-separation suffix for bare SHAKE.
const SHAKE_SUFFIX: u8 = 0x1F;

/// Domain-separation suffix for cSHAKE.
const CSHAKE_SUFFIX: u8 = 0x04;

/// Absorbing half of the Keccak sponge.
///
/// The rate is fixed at 136 bytes. Input may be absorbed in any number of
/// calls; the result only depends on the concatenation of all inputs.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sponge {
    /// 25 little-endian lanes.
    state: [u8; WIDTH],

    /// Write cursor, always `< RATE` between calls.
    pt: usize,
}

impl Sponge {
    /// Creates an empty sponge with a zeroed state.
    pub fn new() -> Self {
        Self {
            state: [0u8; WIDTH],
            pt: 0,
        }
    }

    /// Rate of the sponge in bytes.
    #[inline]
    pub fn rate(&self) -> usize {
        RATE
    }

    /// XORs `data` into the state, permuting every time a full rate block
    /// has been absorbed.
    pub fn absorb(&mut self, data: &[u8]) {
        let mut j = self.pt;

        for &byte in data {
            self.state[j] ^= byte;
            j += 1;

            if j >= RATE {
                keccakf(&mut self.state);
                j = 0;
            }
        }

        self.pt = j;
    }

    /// Pads with the SHA-3 suffix and switches to squeezing.
    pub fn finalize_sha3(self) -> XofReader {
        self.finalize_with(SHA3_SUFFIX)
    }

    /// Pads with the bare SHAKE suffix and switches to squeezing.
    pub fn finalize_shake(self) -> XofReader {
        self.finalize_with(SHAKE_SUFFIX)
    }

    /// Pads with the cSHAKE suffix and switches to squeezing.
    pub fn finalize_cshake(self) -> XofReader {
        self.finalize_with(CSHAKE_SUFFIX)
    }

    /// Discards everything absorbed so far.
    pub fn reset(self) -> Sponge {
        Sponge::new()
    }

    fn finalize_with(self, suffix: u8) -> XofReader {
        let mut state = self.state;

        state[self.pt] ^= suffix;
        state[RATE - 1] ^= 0x80;
        keccakf(&mut state);

        let reader = XofReader { state, pt: 0 };
        state.zeroize();

        reader
    }
}

impl Default for Sponge {
    fn default() -> Self {
        Self::new()
    }
}

/// Squeezing half of the Keccak sponge.
///
/// Output can be read in any number of calls of any size; the stream is the
/// same as a single read of the total length.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct XofReader {
    state: [u8; WIDTH],
    pt: usize,
}

impl XofReader {
    /// Fills `out` with the next bytes of the output stream.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        let mut j = self.pt;

        for byte in out.iter_mut() {
            if j >= RATE {
                keccakf(&mut self.state);
                j = 0;
            }

            *byte = self.state[j];
            j += 1;
        }

        self.pt = j;
    }

    /// Returns the next `len` bytes of the output stream.
    pub fn squeeze_vec(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.squeeze(&mut out);
        out
    }

    /// Ends the computation and returns a fresh, zeroed sponge.
    pub fn reset(self) -> Sponge {
        Sponge::new()
    }
}

/// Computes SHA3-256 of `input`.
pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    let mut sponge = Sponge::new();
    sponge.absorb(input);

    let mut out = [0u8; 32];
    sponge.finalize_sha3().squeeze(&mut out);

    out
}

/// Computes `len` bytes of SHAKE256 output over `input`.
pub fn shake256(input: &[u8], len: usize) -> Vec<u8> {
    let mut sponge = Sponge::new();
    sponge.absorb(input);
    sponge.finalize_shake().squeeze_vec(len)
}
