// src/infrastructure/store/redis_store.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::store::KeyValueStore;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Pool, Runtime};
use redis::AsyncCommands;
use std::{future::Future, sync::Arc, time::Duration};

#[derive(Clone)]
pub struct RedisKeyValueStore {
    pool: Pool,
    op_timeout: Duration,
}

impl RedisKeyValueStore {
    /// Create a new Redis backed store from a redis URL (e.g. redis://:password@host:6379/0).
    ///
    /// The pool connects lazily; every operation, including checking a
    /// connection out of the pool, is bounded by `op_timeout`.
    pub fn from_url(url: &str, op_timeout: Duration) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::store_connection(err.to_string()))?;

        Ok(Self { pool, op_timeout })
    }

    /// Round-trip a `PING` to confirm the server is reachable.
    pub async fn ping(&self) -> ApplicationResult<()> {
        self.bounded("PING", async {
            let mut conn = self
                .pool
                .get()
                .await
                .map_err(|err| ApplicationError::store_connection(err.to_string()))?;

            let _: String = redis::cmd("PING")
                .query_async(&mut conn)
                .await
                .map_err(|err| ApplicationError::store_connection(err.to_string()))?;
            Ok(())
        })
        .await
    }

    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> ApplicationResult<T>
    where
        F: Future<Output = ApplicationResult<T>>,
    {
        tokio::time::timeout(self.op_timeout, fut)
            .await
            .map_err(|_| {
                ApplicationError::store_connection(format!(
                    "{op} timed out after {}ms",
                    self.op_timeout.as_millis()
                ))
            })?
    }
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        let result = self
            .bounded("GET", async {
                let mut conn = self
                    .pool
                    .get()
                    .await
                    .map_err(|err| ApplicationError::store_connection(err.to_string()))?;

                let val: Option<String> = conn
                    .get(key)
                    .await
                    .map_err(|err| ApplicationError::store_connection(err.to_string()))?;
                Ok(val)
            })
            .await;

        if let Err(err) = &result {
            tracing::warn!(key, error = %err, "redis GET failed");
        }
        result
    }

    async fn set(&self, key: &str, value: &str) -> ApplicationResult<()> {
        let result = self
            .bounded("SET", async {
                let mut conn = self
                    .pool
                    .get()
                    .await
                    .map_err(|err| ApplicationError::store_connection(err.to_string()))?;

                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(|err| ApplicationError::store_connection(err.to_string()))?;
                Ok(())
            })
            .await;

        if let Err(err) = &result {
            tracing::warn!(key, error = %err, "redis SET failed");
        }
        result
    }
}

pub fn into_arc(store: RedisKeyValueStore) -> Arc<dyn KeyValueStore> {
    Arc::new(store)
}
