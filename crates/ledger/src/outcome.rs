use oracle_primitives::Checkpoint;
use serde::{Deserialize, Serialize};

/// Why a candidate checkpoint was not written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Timestamp is not newer than the stored checkpoint.
    StaleTimestamp,

    /// Timestamp is too far ahead of the current time.
    FutureTimestamp,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::StaleTimestamp => "stale",
            RejectReason::FutureTimestamp => "future",
        }
    }
}

/// Result of offering one `(timestamp, value)` to a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PutOutcome {
    Accepted { prior: Checkpoint },
    Rejected { prior: Checkpoint, reason: RejectReason },
}

impl PutOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PutOutcome::Accepted { .. })
    }

    /// Checkpoint the key held before this candidate was considered.
    pub fn prior(&self) -> Checkpoint {
        match self {
            PutOutcome::Accepted { prior } | PutOutcome::Rejected { prior, .. } => *prior,
        }
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            PutOutcome::Accepted { .. } => None,
            PutOutcome::Rejected { reason, .. } => Some(*reason),
        }
    }
}
