//! Error types for signature recovery and proof parsing.

use thiserror::Error;

/// Why a signature could not produce an identity.
///
/// Every variant is fatal for the call that supplied the signature. A
/// signature that recovers to the "wrong" signer is not an error; callers
/// compare identities themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Signature blob has the wrong length.
    #[error("invalid signature length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Trailing `v` byte is not a recognized recovery id.
    #[error("invalid recovery id {0}")]
    InvalidRecoveryId(u8),

    /// `r` or `s` is not a valid scalar.
    #[error("invalid signature format")]
    InvalidSignatureFormat,

    /// Well-formed signature that does not recover to any public key.
    #[error("signature does not recover to a public key")]
    Unrecoverable,
}

/// Errors decoding Groth16 verifying keys and proofs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Groth16Error {
    #[error("invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("coordinate of {0} is not a base field element")]
    InvalidCoordinate(&'static str),

    #[error("{0} is not a valid curve point")]
    InvalidPoint(&'static str),

    #[error("verifying key needs at least one IC point")]
    MissingIc,
}
