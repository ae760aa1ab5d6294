use oracle_config::{CostSchedule, OracleConfig};
use oracle_crypto::{recover, Identity, Proof, ProofVerifier, PublicInputs};
use oracle_ledger::{
    CheckpointLedger, CheckpointStore, Clock, ConfiguredStore, LedgerPolicy, PutOutcome, WriteSet,
};
use oracle_msg_fmt::{decode, PriceMessage};
use oracle_primitives::{hash::message_digest, Address, Checkpoint, Symbol, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::*;

use crate::{
    errors::{OracleError, OracleResult},
    events::OracleEvent,
    meter::{MeteredOp, ResourceMeter},
};

/// Bytes fed to the second hash of [`message_digest`]: the EIP-191 prefix
/// followed by the 32-byte inner hash.
const EIP191_PREFIXED_LEN: usize = 28 + 32;

/// Size of one public input as carried in calldata.
const FIELD_ELEMENT_LEN: usize = 32;

/// Summary of a successful put.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutReceipt {
    pub reporter: Address,
    pub timestamp: Timestamp,
    pub events: Vec<OracleEvent>,
    /// Units charged to the meter by this call.
    pub cost: u64,
}

impl PutReceipt {
    pub fn written(&self) -> usize {
        self.events.iter().filter(|e| e.is_written()).count()
    }

    pub fn not_written(&self) -> usize {
        self.events.len() - self.written()
    }
}

/// Accepts signed price messages and checkpoints them per reporter.
///
/// Writes take `&mut self`; hosts that share one pipeline across threads
/// wrap it in a lock.
#[derive(Debug)]
pub struct OraclePutPipeline<S, V, C> {
    ledger: CheckpointLedger<S>,
    verifier: V,
    clock: C,
    costs: CostSchedule,
}

impl<V, C> OraclePutPipeline<ConfiguredStore, V, C>
where
    V: ProofVerifier,
    C: Clock,
{
    /// Builds a pipeline whose store follows `ledger.datadir`: sled under
    /// that directory when set, in memory otherwise.
    pub fn open(config: &OracleConfig, verifier: V, clock: C) -> OracleResult<Self> {
        let store =
            ConfiguredStore::open(config.ledger.datadir.as_deref()).map_err(OracleError::storage)?;
        Ok(Self::from_config(config, store, verifier, clock))
    }
}

impl<S, V, C> OraclePutPipeline<S, V, C>
where
    S: CheckpointStore,
    V: ProofVerifier,
    C: Clock,
{
    pub fn new(store: S, verifier: V, clock: C, policy: LedgerPolicy, costs: CostSchedule) -> Self {
        Self {
            ledger: CheckpointLedger::new(store, policy),
            verifier,
            clock,
            costs,
        }
    }

    pub fn from_config(config: &OracleConfig, store: S, verifier: V, clock: C) -> Self {
        Self::new(store, verifier, clock, config.ledger.policy(), config.costs)
    }

    pub fn ledger(&self) -> &CheckpointLedger<S> {
        &self.ledger
    }

    pub fn costs(&self) -> &CostSchedule {
        &self.costs
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_ledger(self) -> CheckpointLedger<S> {
        self.ledger
    }

    /// Verifies `proof` against `inputs`, then behaves like [`Self::put`].
    ///
    /// The proof is checked before the message is looked at, and a rejected
    /// proof fails the whole call.
    pub fn put_with_proof<M: ResourceMeter + ?Sized>(
        &mut self,
        message: &[u8],
        signature: &[u8],
        proof: &Proof,
        inputs: &PublicInputs,
        meter: &mut M,
    ) -> OracleResult<PutReceipt> {
        let start = meter.consumed();
        let input_len = message.len()
            + signature.len()
            + proof.as_bytes().len()
            + inputs.len() * FIELD_ELEMENT_LEN;
        meter.charge(MeteredOp::Call, self.costs.call_base)?;
        meter.charge(MeteredOp::Input, self.costs.input(input_len))?;
        meter.charge(MeteredOp::ProofVerify, self.costs.proof_verify(inputs.len()))?;

        if !self.verifier.verify(proof, inputs) {
            warn!(proof_len = proof.as_bytes().len(), num_inputs = inputs.len(), "proof rejected");
            return Err(OracleError::ProofInvalid);
        }
        debug!(num_inputs = inputs.len(), "proof accepted");

        self.put_verified(message, signature, meter, start)
    }

    /// Decodes `message`, recovers its signer and offers every pair to the
    /// ledger.
    ///
    /// Stale or future-dated pairs are reported as [`OracleEvent::NotWritten`]
    /// and do not fail the call. Any error leaves the ledger untouched.
    pub fn put<M: ResourceMeter + ?Sized>(
        &mut self,
        message: &[u8],
        signature: &[u8],
        meter: &mut M,
    ) -> OracleResult<PutReceipt> {
        let start = meter.consumed();
        meter.charge(MeteredOp::Call, self.costs.call_base)?;
        meter.charge(
            MeteredOp::Input,
            self.costs.input(message.len() + signature.len()),
        )?;
        self.put_verified(message, signature, meter, start)
    }

    fn put_verified<M: ResourceMeter + ?Sized>(
        &mut self,
        message: &[u8],
        signature: &[u8],
        meter: &mut M,
        start: u64,
    ) -> OracleResult<PutReceipt> {
        let msg = decode(message).inspect_err(|e| warn!(%e, "dropping malformed message"))?;

        meter.charge(
            MeteredOp::Hash,
            self.costs
                .hash(message.len())
                .saturating_add(self.costs.hash(EIP191_PREFIXED_LEN)),
        )?;
        meter.charge(MeteredOp::SignatureRecover, self.costs.signature_recover)?;
        let reporter = recover(&message_digest(message), signature)
            .inspect_err(|e| warn!(%e, "dropping message with bad signature"))?;

        let now = self.clock.now();
        let (ws, events) = self.stage_all(&msg, &reporter, now, meter)?;
        let staged = ws.len();
        self.ledger.commit(ws).map_err(|e| {
            error!(%e, %reporter, "failed to commit checkpoints");
            OracleError::storage(e)
        })?;

        let receipt = PutReceipt {
            reporter: reporter.address(),
            timestamp: msg.timestamp(),
            events,
            cost: meter.consumed().saturating_sub(start),
        };
        info!(
            %reporter,
            timestamp = msg.timestamp(),
            pairs = msg.pairs().len(),
            written = staged,
            cost = receipt.cost,
            "processed price message"
        );
        Ok(receipt)
    }

    fn stage_all<M: ResourceMeter + ?Sized>(
        &self,
        msg: &PriceMessage,
        reporter: &Identity,
        now: Timestamp,
        meter: &mut M,
    ) -> OracleResult<(WriteSet, Vec<OracleEvent>)> {
        let mut ws = WriteSet::new(now);
        let mut events = Vec::with_capacity(msg.pairs().len());
        let timestamp = msg.timestamp();

        for pair in msg.pairs() {
            meter.charge(MeteredOp::LedgerRead, self.costs.ledger_read)?;
            let outcome = self
                .ledger
                .stage(&mut ws, reporter, pair.symbol(), timestamp, pair.value());

            let event = match outcome {
                PutOutcome::Accepted { prior } => {
                    let write_cost = if prior.is_default() {
                        self.costs.ledger_write_fresh
                    } else {
                        self.costs.ledger_write_update
                    };
                    meter.charge(MeteredOp::LedgerWrite, write_cost)?;
                    OracleEvent::Written {
                        reporter: reporter.address(),
                        symbol: pair.symbol().clone(),
                        timestamp,
                        value: pair.value(),
                    }
                }
                PutOutcome::Rejected { prior, reason } => OracleEvent::NotWritten {
                    reporter: reporter.address(),
                    symbol: pair.symbol().clone(),
                    prior_timestamp: prior.timestamp(),
                    attempted_timestamp: timestamp,
                    now,
                    reason,
                },
            };
            meter.charge(MeteredOp::Event, self.costs.event)?;
            events.push(event);
        }

        Ok((ws, events))
    }

    /// Latest checkpoint for `(reporter, symbol)`, `(0, 0)` if none.
    pub fn get(&self, reporter: &Address, symbol: &str) -> Checkpoint {
        match Symbol::new(symbol) {
            Ok(symbol) => self.ledger.get(reporter, &symbol),
            // never accepted by the codec, so never written
            Err(_) => Checkpoint::default(),
        }
    }

    /// Identity that signed `message`.
    ///
    /// The message does not have to decode; it is only parsed to enrich logs.
    pub fn source(&self, message: &[u8], signature: &[u8]) -> OracleResult<Identity> {
        let identity = recover(&message_digest(message), signature)?;
        match decode(message) {
            Ok(msg) => debug!(
                %identity,
                timestamp = msg.timestamp(),
                pairs = msg.pairs().len(),
                "recovered message source"
            ),
            Err(e) => debug!(%identity, %e, "recovered source of undecodable message"),
        }
        Ok(identity)
    }
}
