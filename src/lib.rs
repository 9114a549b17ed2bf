//! Sponge-based cryptography over Keccak and the E521 Edwards curve
//!
//! This crate implements a small, self-contained cryptographic toolbox built
//! on a single permutation, Keccak-f[1600], and a single curve, E521.
//!
//! The focus is on **clarity and auditability**: every construction is
//! written out step by step, and the byte formats it reads and writes are
//! fixed and documented.
//!
//! # Module overview
//!
//! - `hash`
//!   The Keccak sponge (SHA3-256, SHAKE256) and the SP 800-185 functions
//!   built on it: the `left_encode`/`right_encode`/`encode_string`/`bytepad`
//!   encoders, cSHAKE256 and KMACXOF256, one-shot and streaming.
//!
//! - `curve`
//!   Edwards curve arithmetic over the Mersenne field `2^521 − 1`: point
//!   addition, scalar multiplication, decompression and the versioned
//!   point encoding. Curve parameters are configurable and validated.
//!
//! - `keys`
//!   Key pairs derived deterministically from a passphrase.
//!
//! - `encryption`
//!   Two authenticated encryption schemes sharing a KMAC keystream and tag:
//!   passphrase-based (`symmetric`) and public-key (`ecies`).
//!
//! - `rng`
//!   An OS-seeded ChaCha20 generator used for salts and ephemeral scalars.
//!
//! - `service`
//!   Byte-in, bytes-or-hex-out entry points for front ends.
//!
//! # Logging
//!
//! The crate emits `tracing` events (`debug` for each scheme operation,
//! `warn` on authentication failures, `trace` when a curve is built) and
//! never installs a subscriber. Passphrases, keys and plaintexts are never
//! logged.
//!
//! # Non-goals
//!
//! - Constant-time curve arithmetic. Scalar multiplication branches on
//!   secret bits; only tag comparison runs in constant time.
//! - Signatures and any hash function outside the Keccak family.

pub mod curve;
pub mod encryption;
pub mod error;
pub mod hash;
pub mod keys;
pub mod rng;
pub mod service;

pub use error::{Error, Result};
