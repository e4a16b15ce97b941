// src/infrastructure/store/memory_store.rs
use crate::application::ApplicationResult;
use crate::application::ports::store::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-local store with the same per-key atomicity as Redis.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::default();
        store.entries().insert(key.into(), value.into());
        store
    }

    /// Drop `key`, as an eviction or a store restart would.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries().remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // Every critical section is a single map operation, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> ApplicationResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
