//! Proof verification capability.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// Opaque proof bytes, interpreted only by a [`ProofVerifier`].
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Proof(#[serde(with = "hex::serde")] Vec<u8>);

impl Proof {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Proof {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proof({} bytes)", self.0.len())
    }
}

/// A 256-bit big-endian integer handed to the verifier as a public input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldElement(#[serde(with = "hex::serde")] [u8; 32]);

impl FieldElement {
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn from_u64(value: u64) -> Self {
        let mut buf = [0u8; 32];
        buf[24..].copy_from_slice(&value.to_be_bytes());
        Self(buf)
    }

    pub fn as_be_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

/// Ordered public inputs a proof is checked against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicInputs(Vec<FieldElement>);

impl PublicInputs {
    pub fn new(inputs: Vec<FieldElement>) -> Self {
        Self(inputs)
    }

    /// Inputs made of reported values, in order.
    pub fn from_values(values: &[u64]) -> Self {
        Self(values.iter().copied().map(FieldElement::from_u64).collect())
    }

    pub fn as_slice(&self) -> &[FieldElement] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<FieldElement>> for PublicInputs {
    fn from(value: Vec<FieldElement>) -> Self {
        Self(value)
    }
}

/// Accepts or rejects a proof against public inputs.
///
/// Implementations must be deterministic and free of side effects.
pub trait ProofVerifier {
    fn verify(&self, proof: &Proof, inputs: &PublicInputs) -> bool;
}

impl<V: ProofVerifier + ?Sized> ProofVerifier for &V {
    fn verify(&self, proof: &Proof, inputs: &PublicInputs) -> bool {
        (**self).verify(proof, inputs)
    }
}

impl<V: ProofVerifier + ?Sized> ProofVerifier for Box<V> {
    fn verify(&self, proof: &Proof, inputs: &PublicInputs) -> bool {
        (**self).verify(proof, inputs)
    }
}

impl<V: ProofVerifier + ?Sized> ProofVerifier for Arc<V> {
    fn verify(&self, proof: &Proof, inputs: &PublicInputs) -> bool {
        (**self).verify(proof, inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_element_from_u64() {
        let fe = FieldElement::from_u64(0x2bc);
        assert_eq!(&fe.as_be_bytes()[30..], &[0x02, 0xbc]);
        assert!(fe.as_be_bytes()[..30].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_inputs_from_values_preserves_order() {
        let inputs = PublicInputs::from_values(&[700, 800, 1]);
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs.as_slice()[1], FieldElement::from_u64(800));
    }

    #[test]
    fn test_blanket_impls_forward() {
        struct Yes;
        impl ProofVerifier for Yes {
            fn verify(&self, _: &Proof, _: &PublicInputs) -> bool {
                true
            }
        }

        let boxed: Box<dyn ProofVerifier> = Box::new(Yes);
        assert!(boxed.verify(&Proof::default(), &PublicInputs::default()));
        assert!(Arc::new(Yes).verify(&Proof::default(), &PublicInputs::default()));
    }
}
