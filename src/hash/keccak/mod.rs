//! Keccak-f[1600] permutation and the sponge built on it.
//!
//! - `computations`: the five step mappings and the 24-round permutation
//! - `core`: the absorb/finalize/squeeze state machine, SHA3-256 and SHAKE256
//!
//! The tables below are the standard Keccak constants in the standard order.
//! Changing any entry yields a different, non-interoperable permutation.

pub mod computations;
pub mod core;

pub use computations::{keccakf, keccakf_lanes};
pub use self::core::{Sponge, XofReader, sha3_256, shake256};

/// Number of rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Width of the state in bytes (1600 bits).
pub const WIDTH: usize = 200;

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// Capacity parameter in bytes. The rate is `WIDTH - 2 * CAPACITY_PARAM`.
pub const CAPACITY_PARAM: usize = 32;

/// Sponge rate in bytes.
pub const RATE: usize = WIDTH - 2 * CAPACITY_PARAM;

/// Iota round constants.
pub(crate) const RC: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets, in the order lanes are visited by the Pi walk.
pub(crate) const ROTC: [u32; ROUNDS] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi lane positions, starting from lane 1.
pub(crate) const PILN: [usize; ROUNDS] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];
