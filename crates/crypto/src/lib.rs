//! Publisher recovery and proof verification.
//!
//! Recovery maps a message digest and a recoverable ECDSA signature to the
//! [`Identity`] that produced it. Proof verification is behind the
//! [`ProofVerifier`] capability so proof systems can be swapped without
//! touching callers; [`Groth16Verifier`] is the BN254 implementation.

pub mod ecdsa;
pub mod errors;
pub mod groth16;
pub mod identity;
pub mod proof;

#[rustfmt::skip]
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use ecdsa::{recover, recover_message, SIGNATURE_LEN};
pub use errors::{Groth16Error, SignatureError};
pub use groth16::{Groth16Proof, Groth16Verifier, Groth16VerifyingKey};
pub use identity::Identity;
pub use proof::{FieldElement, Proof, ProofVerifier, PublicInputs};
