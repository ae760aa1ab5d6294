use std::path::Path;

use oracle_primitives::{Checkpoint, CheckpointKey};
use tracing::*;

use super::{CheckpointStore, MemCheckpointStore, SledCheckpointStore};
use crate::StoreError;

/// Store picked at startup: durable when a data directory is given,
/// in-memory otherwise.
#[derive(Debug)]
pub enum ConfiguredStore {
    Mem(MemCheckpointStore),
    Sled(SledCheckpointStore),
}

impl ConfiguredStore {
    pub fn open(datadir: Option<&Path>) -> Result<Self, StoreError> {
        match datadir {
            Some(dir) => {
                info!(datadir = %dir.display(), "opening durable checkpoint store");
                Ok(Self::Sled(SledCheckpointStore::open(dir)?))
            }
            None => {
                info!("no datadir set, checkpoints are kept in memory only");
                Ok(Self::Mem(MemCheckpointStore::new()))
            }
        }
    }

    pub fn is_durable(&self) -> bool {
        matches!(self, Self::Sled(_))
    }
}

impl CheckpointStore for ConfiguredStore {
    type Error = StoreError;

    fn get(&self, key: &CheckpointKey) -> Option<Checkpoint> {
        match self {
            Self::Mem(s) => s.get(key),
            Self::Sled(s) => s.get(key),
        }
    }

    fn commit(&mut self, writes: &[(CheckpointKey, Checkpoint)]) -> Result<(), Self::Error> {
        match self {
            Self::Mem(s) => match s.commit(writes) {
                Ok(()) => Ok(()),
                Err(never) => match never {},
            },
            Self::Sled(s) => s.commit(writes),
        }
    }
}
