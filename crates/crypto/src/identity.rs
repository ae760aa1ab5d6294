use std::fmt;

use alloy_primitives::Address;
use secp256k1::PublicKey;
use serde::Serialize;

/// Address of a publisher, as recovered from a signature.
///
/// Only [`crate::recover`] constructs one. Readers that just need to name a
/// reporter use the plain [`Address`] from [`Identity::address`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Identity(Address);

impl Identity {
    /// Derives the Ethereum-style address of a public key: the last 20 bytes
    /// of `keccak256(x ‖ y)`.
    pub(crate) fn from_public_key(pk: &PublicKey) -> Self {
        let uncompressed = pk.serialize_uncompressed();
        Self(Address::from_raw_public_key(&uncompressed[1..]))
    }

    pub fn address(&self) -> Address {
        self.0
    }
}

impl From<Identity> for Address {
    fn from(value: Identity) -> Self {
        value.0
    }
}

impl PartialEq<Address> for Identity {
    fn eq(&self, other: &Address) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
