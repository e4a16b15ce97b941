// src/application/commands/timestamps/publish.rs
use super::{RetryPolicy, TimestampCommandService};
use crate::{
    application::error::ApplicationResult,
    domain::timestamp::{Epoch, TIMESTAMP_KEY},
};

impl TimestampCommandService {
    /// Capture the current wall-clock second and overwrite the shared record
    /// with it. Issues exactly one store write and never retries.
    pub async fn publish(&self) -> ApplicationResult<Epoch> {
        let epoch = Epoch::from_datetime(self.clock.now());
        self.store.set(TIMESTAMP_KEY, &epoch.to_string()).await?;
        tracing::info!(epoch = epoch.as_secs(), "published timestamp");
        Ok(epoch)
    }

    /// `publish` under a bounded retry policy. Each attempt reads the clock
    /// again, so a late success still records the time it was written.
    pub async fn publish_with_retry(&self, policy: &RetryPolicy) -> ApplicationResult<Epoch> {
        let mut attempt = 1;
        loop {
            match self.publish().await {
                Ok(epoch) => return Ok(epoch),
                Err(err) if err.is_retryable() && attempt < policy.max_attempts() => {
                    let delay = policy.backoff_for(attempt);
                    tracing::warn!(
                        attempt,
                        max_attempts = policy.max_attempts(),
                        retry_in_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %err,
                        "publish failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
