use std::{collections::HashMap, convert::Infallible};

use oracle_primitives::{Checkpoint, CheckpointKey};

use super::CheckpointStore;

/// Volatile store, for hosts that persist state themselves and for tests.
#[derive(Debug, Default, Clone)]
pub struct MemCheckpointStore {
    entries: HashMap<CheckpointKey, Checkpoint>,
}

impl MemCheckpointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CheckpointStore for MemCheckpointStore {
    type Error = Infallible;

    fn get(&self, key: &CheckpointKey) -> Option<Checkpoint> {
        self.entries.get(key).copied()
    }

    fn commit(&mut self, writes: &[(CheckpointKey, Checkpoint)]) -> Result<(), Self::Error> {
        for (key, cp) in writes {
            self.entries.insert(key.clone(), *cp);
        }
        Ok(())
    }
}
