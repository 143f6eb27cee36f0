/*
    memory.rs - In-memory persistence

    Map-backed implementation of the persistence port. Nothing survives
    the process; used by tests and anywhere durable state is unwanted.
*/

use super::{PersistencePort, StorageError, StorageKey, StorageResult};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

fn handle_poison<T>(_err: PoisonError<T>) -> StorageError {
    StorageError::Backend("lock poisoned: a thread panicked while holding the lock".to_string())
}

/// Persistence backend keeping every key in memory
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<StorageKey, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistencePort for MemoryBackend {
    fn save(&self, key: StorageKey, json: &str) -> StorageResult<()> {
        self.entries
            .write()
            .map_err(handle_poison)?
            .insert(key, json.to_string());
        Ok(())
    }

    fn load(&self, key: StorageKey) -> StorageResult<Option<String>> {
        Ok(self.entries.read().map_err(handle_poison)?.get(&key).cloned())
    }

    fn remove(&self, key: StorageKey) -> StorageResult<()> {
        self.entries.write().map_err(handle_poison)?.remove(&key);
        Ok(())
    }
}
