//! Error types for the crypto crate.

use thiserror::Error;

use crate::MIN_SIGNATURE_LEN;

/// Result type alias for signature operations.
pub type Result<T> = std::result::Result<T, SignatureError>;

/// Errors that can occur while validating a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Signature is too short to carry any prefix
    #[error("invalid signature, should have at least {} characters", MIN_SIGNATURE_LEN)]
    TooShort {
        /// Length of the rejected signature in bytes
        len: usize,
    },

    /// Signature prefix is not one of the accepted hash prefixes
    #[error("valid hash prefixes: [{}], got: {}", .accepted.join(", "), .got)]
    UnsupportedAlgorithm {
        /// Accepted prefixes, in canonical order
        accepted: Vec<&'static str>,
        /// The signature as received
        got: String,
    },

    /// Digest does not match the payload and key
    #[error("invalid signature")]
    Mismatch,

    /// Algorithm name could not be parsed
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A verifier was configured without any algorithm
    #[error("at least one hash algorithm must be accepted")]
    NoAlgorithms,
}

/// Error code for integration with host error handling.
/// Range: 11xxx for signature errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureErrorCode {
    /// Signature too short
    TooShort = 11001,
    /// Unsupported hash prefix
    UnsupportedAlgorithm = 11002,
    /// Signature mismatch
    Mismatch = 11003,
    /// Unknown algorithm name
    UnknownAlgorithm = 11004,
    /// Empty algorithm set
    NoAlgorithms = 11005,
}

impl SignatureError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SignatureErrorCode {
        match self {
            SignatureError::TooShort { .. } => SignatureErrorCode::TooShort,
            SignatureError::UnsupportedAlgorithm { .. } => SignatureErrorCode::UnsupportedAlgorithm,
            SignatureError::Mismatch => SignatureErrorCode::Mismatch,
            SignatureError::UnknownAlgorithm(_) => SignatureErrorCode::UnknownAlgorithm,
            SignatureError::NoAlgorithms => SignatureErrorCode::NoAlgorithms,
        }
    }
}
