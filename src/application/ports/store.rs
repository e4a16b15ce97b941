// src/application/ports/store.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Shared key-value store used as the only coordination point between the
/// publisher and readers. `get` and `set` are atomic per key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Return the value stored under `key`, or `None` when the key is absent.
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> ApplicationResult<()>;
}
