use oracle_primitives::{hash::message_digest, FixedPoint, Symbol, Timestamp, B256};
use serde::{Deserialize, Serialize};

use crate::{codec, CodecError, CodecResult};

/// Largest number of pairs the `u32` count field can describe.
pub const MAX_PAIRS: usize = u32::MAX as usize;

/// Family a signed message belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageTag {
    Prices,
}

impl MessageTag {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MessageTag::Prices => "prices",
        }
    }

    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        match buf {
            b"prices" => Some(MessageTag::Prices),
            _ => None,
        }
    }
}

/// One reported `(symbol, value)` pair. The value is fixed-point, see [`FixedPoint`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceObservation {
    symbol: Symbol,
    value: u64,
}

impl PriceObservation {
    pub fn new(symbol: Symbol, value: u64) -> Self {
        Self { symbol, value }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn price(&self) -> FixedPoint {
        FixedPoint::from_raw(self.value)
    }
}

/// A batch of observations sharing one tag and one timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceMessage {
    tag: MessageTag,
    timestamp: Timestamp,
    pairs: Vec<PriceObservation>,
}

impl PriceMessage {
    pub fn new(
        tag: MessageTag,
        timestamp: Timestamp,
        pairs: Vec<PriceObservation>,
    ) -> CodecResult<Self> {
        if pairs.len() > MAX_PAIRS {
            return Err(CodecError::TooManyPairs(pairs.len()));
        }
        Ok(Self {
            tag,
            timestamp,
            pairs,
        })
    }

    /// Builds a `prices` message from raw fixed-point values.
    pub fn prices(
        timestamp: Timestamp,
        pairs: impl IntoIterator<Item = (Symbol, u64)>,
    ) -> CodecResult<Self> {
        let pairs = pairs
            .into_iter()
            .map(|(sym, value)| PriceObservation::new(sym, value))
            .collect();
        Self::new(MessageTag::Prices, timestamp, pairs)
    }

    pub fn tag(&self) -> MessageTag {
        self.tag
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn pairs(&self) -> &[PriceObservation] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<PriceObservation> {
        self.pairs
    }

    pub fn encode(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Digest a reporter signs for this message.
    pub fn digest(&self) -> B256 {
        message_digest(&self.encode())
    }
}
