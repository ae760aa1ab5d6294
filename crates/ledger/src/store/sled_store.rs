use std::{collections::HashMap, path::Path};

use oracle_primitives::{Checkpoint, CheckpointKey};
use sled::{Batch, Db, Tree};
use tracing::*;

use super::CheckpointStore;
use crate::StoreError;

const CHECKPOINT_TREE: &str = "checkpoints";

/// Durable store on top of a sled tree.
///
/// Keys are [`CheckpointKey::to_storage_key`], values are borsh-encoded
/// [`Checkpoint`]s. The full set is mirrored in memory at open time so reads
/// never hit disk.
#[derive(Debug)]
pub struct SledCheckpointStore {
    tree: Tree,
    cache: HashMap<CheckpointKey, Checkpoint>,
}

impl SledCheckpointStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Self::from_db(&db)
    }

    pub fn from_db(db: &Db) -> Result<Self, StoreError> {
        let tree = db.open_tree(CHECKPOINT_TREE)?;

        let mut cache = HashMap::new();
        for entry in tree.iter() {
            let (k, v) = entry?;
            let key = CheckpointKey::from_storage_key(&k)
                .ok_or_else(|| StoreError::Corrupt(format!("bad key {k:?}")))?;
            let cp: Checkpoint =
                borsh::from_slice(&v).map_err(|e| StoreError::Corrupt(e.to_string()))?;
            cache.insert(key, cp);
        }

        debug!(entries = cache.len(), "loaded checkpoint store");
        Ok(Self { tree, cache })
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl CheckpointStore for SledCheckpointStore {
    type Error = StoreError;

    fn get(&self, key: &CheckpointKey) -> Option<Checkpoint> {
        self.cache.get(key).copied()
    }

    fn commit(&mut self, writes: &[(CheckpointKey, Checkpoint)]) -> Result<(), Self::Error> {
        if writes.is_empty() {
            return Ok(());
        }

        let mut batch = Batch::default();
        for (key, cp) in writes {
            let value = borsh::to_vec(cp).map_err(|e| StoreError::Corrupt(e.to_string()))?;
            batch.insert(key.to_storage_key(), value);
        }
        self.tree.apply_batch(batch)?;

        // the batch is visible in the tree from here on, flush or not
        for (key, cp) in writes {
            self.cache.insert(key.clone(), *cp);
        }
        self.tree.flush()?;
        Ok(())
    }
}
