use std::collections::HashMap;

use oracle_crypto::Identity;
use oracle_primitives::{Address, Checkpoint, CheckpointKey, Symbol, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::*;

use crate::{
    outcome::{PutOutcome, RejectReason},
    store::CheckpointStore,
};

/// How far ahead of `now` a timestamp may be, exclusive.
pub const DEFAULT_FUTURE_TOLERANCE_SECS: u64 = 3600;

/// Acceptance rules shared by every key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerPolicy {
    /// A timestamp `t` is only accepted while `t < now + future_tolerance_secs`.
    pub future_tolerance_secs: u64,
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            future_tolerance_secs: DEFAULT_FUTURE_TOLERANCE_SECS,
        }
    }
}

impl LedgerPolicy {
    fn check(&self, prior: &Checkpoint, timestamp: Timestamp, now: Timestamp) -> Option<RejectReason> {
        if timestamp >= now.saturating_add(self.future_tolerance_secs) {
            return Some(RejectReason::FutureTimestamp);
        }
        if timestamp <= prior.timestamp() {
            return Some(RejectReason::StaleTimestamp);
        }
        None
    }
}

/// Checkpoints staged during one call, not yet visible in the ledger.
///
/// Later candidates for a key are judged against earlier staged ones, so a
/// batch behaves exactly like the same writes applied one at a time.
#[derive(Debug)]
pub struct WriteSet {
    now: Timestamp,
    staged: HashMap<CheckpointKey, usize>,
    writes: Vec<(CheckpointKey, Checkpoint)>,
}

impl WriteSet {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now,
            staged: HashMap::new(),
            writes: Vec::new(),
        }
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    fn get(&self, key: &CheckpointKey) -> Option<Checkpoint> {
        self.staged.get(key).map(|&i| self.writes[i].1)
    }

    fn insert(&mut self, key: CheckpointKey, cp: Checkpoint) {
        match self.staged.get(&key) {
            Some(&i) => self.writes[i].1 = cp,
            None => {
                self.staged.insert(key.clone(), self.writes.len());
                self.writes.push((key, cp));
            }
        }
    }
}

/// Latest accepted checkpoint per (reporter, symbol).
#[derive(Debug)]
pub struct CheckpointLedger<S> {
    store: S,
    policy: LedgerPolicy,
}

impl<S: CheckpointStore> CheckpointLedger<S> {
    pub fn new(store: S, policy: LedgerPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &LedgerPolicy {
        &self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Stored checkpoint for a key, `(0, 0)` if it was never written.
    pub fn get(&self, reporter: &Address, symbol: &Symbol) -> Checkpoint {
        self.store
            .get(&CheckpointKey::new(*reporter, symbol.clone()))
            .unwrap_or_default()
    }

    /// Judges a candidate and stages it in `ws` if accepted.
    pub fn stage(
        &self,
        ws: &mut WriteSet,
        identity: &Identity,
        symbol: &Symbol,
        timestamp: Timestamp,
        value: u64,
    ) -> PutOutcome {
        let key = CheckpointKey::new(identity.address(), symbol.clone());
        let prior = ws
            .get(&key)
            .or_else(|| self.store.get(&key))
            .unwrap_or_default();

        if let Some(reason) = self.policy.check(&prior, timestamp, ws.now()) {
            debug!(
                reporter = %identity,
                %symbol,
                timestamp,
                prior_timestamp = prior.timestamp(),
                now = ws.now(),
                reason = reason.as_str(),
                "checkpoint not written"
            );
            return PutOutcome::Rejected { prior, reason };
        }

        trace!(reporter = %identity, %symbol, timestamp, value, "staged checkpoint");
        ws.insert(key, Checkpoint::new(timestamp, value));
        PutOutcome::Accepted { prior }
    }

    /// Applies every staged write to the store at once.
    pub fn commit(&mut self, ws: WriteSet) -> Result<(), S::Error> {
        self.store.commit(&ws.writes)
    }

    /// Single-write convenience: stage then commit immediately.
    pub fn put(
        &mut self,
        identity: &Identity,
        symbol: &Symbol,
        timestamp: Timestamp,
        value: u64,
        now: Timestamp,
    ) -> Result<PutOutcome, S::Error> {
        let mut ws = WriteSet::new(now);
        let outcome = self.stage(&mut ws, identity, symbol, timestamp, value);
        self.commit(ws)?;
        Ok(outcome)
    }
}
