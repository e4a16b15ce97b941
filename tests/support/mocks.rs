// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use timestamp_relay::application::ApplicationResult;
use timestamp_relay::application::error::ApplicationError;
use timestamp_relay::application::ports::{store::KeyValueStore, time::Clock};
use timestamp_relay::infrastructure::store::InMemoryKeyValueStore;

/// 2022-01-01T00:00:00Z
pub const NEW_YEAR_2022: i64 = 1_640_995_200;

static NEW_YEAR_2022_UTC: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2022-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn new_year_2022() -> DateTime<Utc> {
    *NEW_YEAR_2022_UTC
}

/// Always reports the same instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Wall clock that advances with tokio's (possibly paused) clock.
pub struct TokioClock {
    base: DateTime<Utc>,
    start: tokio::time::Instant,
}

impl TokioClock {
    pub fn starting_at(base: DateTime<Utc>) -> Self {
        Self {
            base,
            start: tokio::time::Instant::now(),
        }
    }
}

impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = tokio::time::Instant::now() - self.start;
        self.base + TimeDelta::from_std(elapsed).expect("elapsed fits in TimeDelta")
    }
}

/// In-memory store that also records every call made against it.
#[derive(Default)]
pub struct RecordingStore {
    inner: InMemoryKeyValueStore,
    writes: Mutex<Vec<(String, String)>>,
    reads: AtomicUsize,
}

impl RecordingStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        Self {
            inner: InMemoryKeyValueStore::with_entry(key, value),
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn key_count(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl KeyValueStore for RecordingStore {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> ApplicationResult<()> {
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        self.inner.set(key, value).await
    }
}

/// Store whose every operation fails as if the server were down.
#[derive(Default)]
pub struct UnreachableStore {
    attempts: AtomicUsize,
}

impl UnreachableStore {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for UnreachableStore {
    async fn get(&self, _key: &str) -> ApplicationResult<Option<String>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ApplicationError::store_connection("connection refused"))
    }

    async fn set(&self, _key: &str, _value: &str) -> ApplicationResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ApplicationError::store_connection("connection refused"))
    }
}

/// Fails the first `failures` writes, then behaves like an in-memory store.
pub struct FlakyStore {
    inner: InMemoryKeyValueStore,
    failures: usize,
    attempts: AtomicUsize,
}

impl FlakyStore {
    pub fn failing_first(failures: usize) -> Self {
        Self {
            inner: InMemoryKeyValueStore::new(),
            failures,
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> ApplicationResult<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            return Err(ApplicationError::store_connection(format!(
                "transient failure #{}",
                attempt + 1
            )));
        }
        self.inner.set(key, value).await
    }
}

/// Store whose writes take `delay` to complete; tracks writes in flight.
pub struct SlowStore {
    inner: InMemoryKeyValueStore,
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl SlowStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: InMemoryKeyValueStore::new(),
            delay,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for SlowStore {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> ApplicationResult<()> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        let result = self.inner.set(key, value).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
