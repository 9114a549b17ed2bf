//! NIST SP 800-185 derived functions.
//!
//! - `encoding`: `left_encode`, `right_encode`, `encode_string`, `bytepad`
//! - `core`: cSHAKE256 and KMACXOF256, one-shot and incremental

pub mod core;
pub mod encoding;

pub use self::core::{KmacXof256, cshake256, kmacxof256, kmacxof256_into};
pub use encoding::{EncodedInteger, bytepad, encode_string, left_encode, right_encode};

/// Customization strings separating every KMAC use in the crate.
///
/// These are part of the wire format: any implementation that wants to read
/// our hashes, tags or cryptograms must use exactly the same strings.
pub mod customization {
    /// Plain file hash.
    pub const HASH: &[u8] = b"D";

    /// Passphrase-derived authentication tag.
    pub const TAG: &[u8] = b"T";

    /// Passphrase to private scalar.
    pub const KEYGEN: &[u8] = b"K";

    /// Symmetric key derivation.
    pub const SYMMETRIC_KDF: &[u8] = b"S";

    /// Symmetric keystream.
    pub const SYMMETRIC_ENCRYPT: &[u8] = b"SKE";

    /// Symmetric tag.
    pub const SYMMETRIC_AUTH: &[u8] = b"SKA";

    /// Public-key key derivation.
    pub const PUBLIC_KDF: &[u8] = b"P";

    /// Public-key keystream.
    pub const PUBLIC_ENCRYPT: &[u8] = b"PKE";

    /// Public-key tag.
    pub const PUBLIC_AUTH: &[u8] = b"PKA";
}
