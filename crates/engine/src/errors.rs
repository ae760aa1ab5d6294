use std::error::Error;

use oracle_crypto::SignatureError;
use oracle_msg_fmt::CodecError;
use thiserror::Error;

use crate::meter::MeterError;

pub type OracleResult<T> = Result<T, OracleError>;

/// Failures that abort a whole call. Nothing is written to the ledger when
/// one of these is returned.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("malformed message: {0}")]
    MalformedMessage(#[from] CodecError),

    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] SignatureError),

    #[error("proof rejected")]
    ProofInvalid,

    #[error("out of budget: {0}")]
    OutOfBudget(#[from] MeterError),

    #[error("storage: {0}")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

impl OracleError {
    pub(crate) fn storage<E: Error + Send + Sync + 'static>(e: E) -> Self {
        Self::Storage(Box::new(e))
    }
}
