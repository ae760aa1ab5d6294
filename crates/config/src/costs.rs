use serde::{Deserialize, Serialize};

/// Unit costs charged to the resource meter.
///
/// Defaults follow EVM gas prices for the equivalent on-chain work, so
/// measured totals line up with what an Ethereum host would bill.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSchedule {
    /// Flat cost of entering any write call.
    pub call_base: u64,

    /// Per byte of caller-supplied input (message, signature, proof).
    pub input_per_byte: u64,

    /// Flat cost of one hash invocation.
    pub hash_base: u64,

    /// Per 32-byte word hashed.
    pub hash_per_word: u64,

    /// Public key recovery from a signature.
    pub signature_recover: u64,

    /// Fixed part of a proof verification (the pairing check).
    pub proof_verify_base: u64,

    /// Per public input folded into the verification.
    pub proof_verify_per_input: u64,

    /// Reading one checkpoint.
    pub ledger_read: u64,

    /// Writing a checkpoint for a key that was never written.
    pub ledger_write_fresh: u64,

    /// Overwriting an existing checkpoint.
    pub ledger_write_update: u64,

    /// Emitting one event.
    pub event: u64,
}

impl Default for CostSchedule {
    fn default() -> Self {
        Self {
            call_base: 21_000,
            input_per_byte: 16,
            hash_base: 30,
            hash_per_word: 6,
            signature_recover: 3_000,
            proof_verify_base: 181_000,
            proof_verify_per_input: 6_300,
            ledger_read: 2_100,
            ledger_write_fresh: 22_100,
            ledger_write_update: 5_000,
            event: 1_500,
        }
    }
}

impl CostSchedule {
    /// Cost of hashing `len` bytes.
    pub fn hash(&self, len: usize) -> u64 {
        let words = len.div_ceil(32) as u64;
        self.hash_base
            .saturating_add(self.hash_per_word.saturating_mul(words))
    }

    /// Cost of verifying a proof with `num_inputs` public inputs.
    pub fn proof_verify(&self, num_inputs: usize) -> u64 {
        self.proof_verify_base
            .saturating_add(self.proof_verify_per_input.saturating_mul(num_inputs as u64))
    }

    /// Cost of carrying `len` bytes of input.
    pub fn input(&self, len: usize) -> u64 {
        self.input_per_byte.saturating_mul(len as u64)
    }
}
