//! Errors raised while constructing primitive values.

use thiserror::Error;

use crate::symbol::MAX_SYMBOL_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("symbol is empty")]
    Empty,

    #[error("symbol is {0} bytes long, max is {MAX_SYMBOL_LEN}")]
    TooLong(usize),

    #[error("symbol is not valid utf-8")]
    NotUtf8,
}
