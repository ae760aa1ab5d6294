//! Backing stores for checkpoints.

mod configured;
mod mem;
mod sled_store;

use std::error::Error;

use oracle_primitives::{Checkpoint, CheckpointKey};

pub use configured::ConfiguredStore;
pub use mem::MemCheckpointStore;
pub use sled_store::SledCheckpointStore;

/// Key-value storage for the latest checkpoint per key.
///
/// Reads cannot fail: stores keep the current checkpoint set readable in
/// memory and only touch the backing medium on commit.
pub trait CheckpointStore {
    type Error: Error + Send + Sync + 'static;

    fn get(&self, key: &CheckpointKey) -> Option<Checkpoint>;

    /// Applies all writes at once. Either every write lands or none does.
    fn commit(&mut self, writes: &[(CheckpointKey, Checkpoint)]) -> Result<(), Self::Error>;
}
