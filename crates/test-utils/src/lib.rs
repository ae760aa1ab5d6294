//! Shared fixtures for oracle tests: a signing reporter, canned proof
//! verifiers, in-memory pipelines and proptest strategies.

use oracle_config::CostSchedule;
use oracle_crypto::{
    test_utils::{identity_of, sign_message},
    Identity, Proof, ProofVerifier, PublicInputs, SIGNATURE_LEN,
};
use oracle_engine::OraclePutPipeline;
use oracle_ledger::{FixedClock, LedgerPolicy, MemCheckpointStore};
use oracle_msg_fmt::PriceMessage;
use oracle_primitives::{Address, Symbol, Timestamp};
use secp256k1::SecretKey;

pub mod strategies;

pub use oracle_crypto::test_utils::Groth16Trapdoor;

/// Secret key of the well-known reporter used across the test suites.
pub const REPORTER_SECRET_KEY: &str =
    "177ee777e72b8c042e05ef41d1db0f17f1fcb0e8150b37cfad6993e4373bdf10";

/// Address derived from [`REPORTER_SECRET_KEY`].
pub const REPORTER_ADDRESS: &str = "0x1826265c3156c3b9b9e751dc4635376f3cd6ee06";

/// Arbitrary but fixed "current time" for tests.
pub const TEST_NOW: Timestamp = 1_700_000_000;

/// Encoded message plus the signature over it.
#[derive(Clone, Debug)]
pub struct SignedMessage {
    pub message: Vec<u8>,
    pub signature: [u8; SIGNATURE_LEN],
}

/// A reporter able to sign price messages.
#[derive(Debug)]
pub struct TestReporter {
    sk: SecretKey,
}

impl Default for TestReporter {
    fn default() -> Self {
        let bytes = hex::decode(REPORTER_SECRET_KEY).expect("test: valid hex");
        Self::new(SecretKey::from_slice(&bytes).expect("test: valid secret key"))
    }
}

impl TestReporter {
    pub fn new(sk: SecretKey) -> Self {
        Self { sk }
    }

    pub fn from_seed(seed: u8) -> Self {
        Self::new(oracle_crypto::test_utils::test_secret_key(seed))
    }

    pub fn identity(&self) -> Identity {
        identity_of(&self.sk)
    }

    pub fn address(&self) -> Address {
        self.identity().address()
    }

    pub fn sign(&self, msg: &PriceMessage) -> SignedMessage {
        let message = msg.encode();
        let signature = sign_message(&message, &self.sk);
        SignedMessage { message, signature }
    }

    /// Builds and signs a `prices` message.
    pub fn sign_prices(&self, timestamp: Timestamp, pairs: &[(&str, u64)]) -> SignedMessage {
        self.sign(&prices(timestamp, pairs))
    }
}

/// Builds a `prices` message, panicking on invalid symbols.
pub fn prices(timestamp: Timestamp, pairs: &[(&str, u64)]) -> PriceMessage {
    PriceMessage::prices(
        timestamp,
        pairs
            .iter()
            .map(|(s, v)| (Symbol::new(*s).expect("test: valid symbol"), *v)),
    )
    .expect("test: message fits")
}

/// Verifier that returns a fixed answer.
#[derive(Copy, Clone, Debug)]
pub struct StaticVerifier(pub bool);

impl ProofVerifier for StaticVerifier {
    fn verify(&self, _proof: &Proof, _inputs: &PublicInputs) -> bool {
        self.0
    }
}

pub type MemPipeline<V = StaticVerifier> = OraclePutPipeline<MemCheckpointStore, V, FixedClock>;

/// In-memory pipeline with default policy and costs, clock fixed at `now`.
pub fn mem_pipeline<V: ProofVerifier>(verifier: V, now: Timestamp) -> MemPipeline<V> {
    OraclePutPipeline::new(
        MemCheckpointStore::new(),
        verifier,
        FixedClock::new(now),
        LedgerPolicy::default(),
        CostSchedule::default(),
    )
}
