//! Per-(reporter, symbol) checkpoint ledger.
//!
//! Each key holds the last accepted `(timestamp, value)`. A write is accepted
//! only if its timestamp is strictly newer than the stored one and earlier
//! than `now + future_tolerance_secs`. Writes made during one call are staged
//! in a [`WriteSet`] and reach the store together on [`CheckpointLedger::commit`].

mod clock;
mod errors;
mod ledger;
mod outcome;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::StoreError;
pub use ledger::{CheckpointLedger, LedgerPolicy, WriteSet, DEFAULT_FUTURE_TOLERANCE_SECS};
pub use outcome::{PutOutcome, RejectReason};
pub use store::{CheckpointStore, ConfiguredStore, MemCheckpointStore, SledCheckpointStore};
