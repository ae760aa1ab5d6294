use std::fmt;

use oracle_config::MeterConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of work a charge is made for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeteredOp {
    Call,
    Input,
    ProofVerify,
    Hash,
    SignatureRecover,
    LedgerRead,
    LedgerWrite,
    Event,
}

impl fmt::Display for MeteredOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MeteredOp::Call => "call",
            MeteredOp::Input => "input",
            MeteredOp::ProofVerify => "proof_verify",
            MeteredOp::Hash => "hash",
            MeteredOp::SignatureRecover => "signature_recover",
            MeteredOp::LedgerRead => "ledger_read",
            MeteredOp::LedgerWrite => "ledger_write",
            MeteredOp::Event => "event",
        };
        f.write_str(s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("{op} needs {requested} units, {consumed} of {limit} already used")]
pub struct MeterError {
    pub op: MeteredOp,
    pub requested: u64,
    pub consumed: u64,
    pub limit: u64,
}

/// Accounts for the work done by a call.
pub trait ResourceMeter {
    /// Records `units` of work, failing without recording anything if the
    /// budget cannot cover it.
    fn charge(&mut self, op: MeteredOp, units: u64) -> Result<(), MeterError>;

    /// Total units recorded so far.
    fn consumed(&self) -> u64;
}

impl<M: ResourceMeter + ?Sized> ResourceMeter for &mut M {
    fn charge(&mut self, op: MeteredOp, units: u64) -> Result<(), MeterError> {
        (**self).charge(op, units)
    }

    fn consumed(&self) -> u64 {
        (**self).consumed()
    }
}

/// Counter with an optional hard limit.
#[derive(Clone, Debug, Default)]
pub struct GasMeter {
    limit: Option<u64>,
    consumed: u64,
}

impl GasMeter {
    /// Measures without ever failing.
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: u64) -> Self {
        Self {
            limit: Some(limit),
            consumed: 0,
        }
    }

    pub fn from_config(config: &MeterConfig) -> Self {
        match config.call_budget {
            Some(limit) => Self::with_limit(limit),
            None => Self::unlimited(),
        }
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn remaining(&self) -> Option<u64> {
        self.limit.map(|l| l.saturating_sub(self.consumed))
    }
}

impl ResourceMeter for GasMeter {
    fn charge(&mut self, op: MeteredOp, units: u64) -> Result<(), MeterError> {
        let next = self.consumed.saturating_add(units);
        if let Some(limit) = self.limit {
            if next > limit {
                return Err(MeterError {
                    op,
                    requested: units,
                    consumed: self.consumed,
                    limit,
                });
            }
        }
        self.consumed = next;
        Ok(())
    }

    fn consumed(&self) -> u64 {
        self.consumed
    }
}
