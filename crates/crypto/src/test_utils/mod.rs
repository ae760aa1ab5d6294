//! Helpers for producing signatures and proofs in tests.

mod ecdsa;
mod groth16;

pub use ecdsa::{identity_of, sign_digest, sign_message, test_secret_key};
pub use groth16::Groth16Trapdoor;
