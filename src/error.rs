//! Error type shared by every module of the crate.
//!
//! Low-level encoding errors only surface when a caller supplies its own
//! parameters (a zero `bytepad` width, a bit length that is not a multiple of
//! eight). The schemes built on top use fixed parameters and never raise
//! them. Authentication failures are always reported as
//! [`Error::AuthenticationFailure`] and never come with partial plaintext.

use thiserror::Error;

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type.
#[derive(Error, Debug)]
pub enum Error {
    /// An SP 800-185 encoder was called with an invalid argument.
    #[error("invalid encoding input: {0}")]
    InvalidEncodingInput(String),

    /// The x-coordinate has no matching y-coordinate of the requested parity.
    #[error("no square root exists for the requested point")]
    NoSquareRoot,

    /// A point-addition denominator has no inverse modulo `p`.
    #[error("denominator is not invertible modulo p")]
    NonInvertible,

    /// The recomputed tag does not match the stored tag.
    #[error("authentication failed: wrong passphrase or tampered data")]
    AuthenticationFailure,

    /// Persisted bytes do not describe a valid cryptogram or key.
    #[error("malformed cryptogram: {0}")]
    MalformedCryptogram(String),

    /// Curve parameters failed validation.
    #[error("invalid curve parameters: {0}")]
    InvalidCurveParams(String),

    /// Reading the input stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
