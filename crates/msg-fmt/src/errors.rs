use oracle_primitives::SymbolError;
use thiserror::Error;

pub type CodecResult<T> = Result<T, CodecError>;

/// Reasons a byte string is not a well-formed price message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("input ended while reading {0}")]
    Truncated(&'static str),

    #[error("unrecognized message tag {0:?}")]
    UnknownTag(String),

    #[error("pair count {count} cannot fit in the remaining {remaining} bytes")]
    PairCountTooLarge { count: u32, remaining: usize },

    #[error("symbol length {len} exceeds remaining {remaining} bytes")]
    SymbolOverrun { len: usize, remaining: usize },

    #[error("invalid symbol at pair {index}: {source}")]
    InvalidSymbol {
        index: usize,
        #[source]
        source: SymbolError,
    },

    #[error("{0} trailing bytes after last pair")]
    TrailingBytes(usize),

    #[error("message has {0} pairs, more than the count field can hold")]
    TooManyPairs(usize),
}
