use oracle_ledger::RejectReason;
use oracle_primitives::{Address, Symbol, Timestamp};
use serde::{Deserialize, Serialize};

/// Per-pair result of a put, in message order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleEvent {
    Written {
        reporter: Address,
        symbol: Symbol,
        timestamp: Timestamp,
        value: u64,
    },

    NotWritten {
        reporter: Address,
        symbol: Symbol,
        prior_timestamp: Timestamp,
        attempted_timestamp: Timestamp,
        now: Timestamp,
        reason: RejectReason,
    },
}

impl OracleEvent {
    pub fn symbol(&self) -> &Symbol {
        match self {
            OracleEvent::Written { symbol, .. } | OracleEvent::NotWritten { symbol, .. } => symbol,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, OracleEvent::Written { .. })
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            OracleEvent::Written { .. } => None,
            OracleEvent::NotWritten { reason, .. } => Some(*reason),
        }
    }
}
