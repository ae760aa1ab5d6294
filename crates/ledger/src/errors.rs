use thiserror::Error;

/// Errors from the durable checkpoint store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sled: {0}")]
    Sled(#[from] sled::Error),

    #[error("corrupt checkpoint entry: {0}")]
    Corrupt(String),
}
