//! Checkpoint records kept per (reporter, symbol).

use alloy_primitives::Address;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::{price::FixedPoint, symbol::Symbol, Timestamp};

const ADDRESS_LEN: usize = 20;

/// Last accepted observation for a key.
///
/// The default `(0, 0)` stands for "never written".
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct Checkpoint {
    timestamp: Timestamp,
    value: u64,
}

impl Checkpoint {
    pub const fn new(timestamp: Timestamp, value: u64) -> Self {
        Self { timestamp, value }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub const fn value(&self) -> u64 {
        self.value
    }

    pub const fn price(&self) -> FixedPoint {
        FixedPoint::from_raw(self.value)
    }

    /// Whether this is still the implicit default record.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl From<(Timestamp, u64)> for Checkpoint {
    fn from((timestamp, value): (Timestamp, u64)) -> Self {
        Self::new(timestamp, value)
    }
}

impl From<Checkpoint> for (Timestamp, u64) {
    fn from(cp: Checkpoint) -> Self {
        (cp.timestamp, cp.value)
    }
}

/// Ledger key: the reporter address and the symbol it reported.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CheckpointKey {
    reporter: Address,
    symbol: Symbol,
}

impl CheckpointKey {
    pub fn new(reporter: Address, symbol: Symbol) -> Self {
        Self { reporter, symbol }
    }

    pub fn reporter(&self) -> &Address {
        &self.reporter
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Byte form used as a storage key: `reporter (20) ‖ symbol`.
    ///
    /// The reporter is fixed width, so the encoding is prefix-free per reporter.
    pub fn to_storage_key(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(ADDRESS_LEN + self.symbol.len());
        buf.extend_from_slice(self.reporter.as_slice());
        buf.extend_from_slice(self.symbol.as_bytes());
        buf
    }

    /// Inverse of [`Self::to_storage_key`].
    pub fn from_storage_key(buf: &[u8]) -> Option<Self> {
        if buf.len() <= ADDRESS_LEN {
            return None;
        }
        let (reporter, symbol) = buf.split_at(ADDRESS_LEN);
        let symbol = Symbol::from_bytes(symbol).ok()?;
        Some(Self::new(Address::from_slice(reporter), symbol))
    }
}
