// src/application/commands/timestamps/schedule.rs
use std::{future::Future, sync::Arc, time::Duration};

use tokio::time::MissedTickBehavior;

use super::{RetryPolicy, TimestampCommandService};
use crate::application::error::ApplicationResult;

/// Drives `publish` on a monotonic ticker: once immediately, then each time
/// `interval` has elapsed since the previous tick.
pub struct PublishScheduler {
    commands: Arc<TimestampCommandService>,
    interval: Duration,
    retry: RetryPolicy,
}

impl PublishScheduler {
    pub fn new(commands: Arc<TimestampCommandService>, interval: Duration, retry: RetryPolicy) -> Self {
        // tokio rejects a zero period.
        let interval = interval.max(Duration::from_millis(1));
        Self {
            commands,
            interval,
            retry,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Run until `shutdown` resolves, returning the number of completed
    /// publishes. Shutdown is honoured between ticks and while a publish is
    /// retrying. A tick whose retries are exhausted ends the loop with the
    /// store error; at most one publish is ever in flight.
    pub async fn run<F>(&self, shutdown: F) -> ApplicationResult<u64>
    where
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(self.interval);
        // A slow write pushes the schedule back instead of bursting to catch up.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        tracing::info!(
            interval_ms = u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX),
            max_attempts = self.retry.max_attempts(),
            "publisher started"
        );

        let mut published: u64 = 0;
        loop {
            tokio::select! {
                biased;

                () = &mut shutdown => {
                    tracing::info!(published, "publisher stopping");
                    return Ok(published);
                }

                _ = ticker.tick() => {
                    // Shutdown also interrupts a publish waiting out its retry backoff.
                    let outcome = tokio::select! {
                        biased;
                        () = &mut shutdown => None,
                        result = self.commands.publish_with_retry(&self.retry) => Some(result),
                    };
                    match outcome {
                        None => {
                            tracing::info!(published, "publisher stopping mid-publish");
                            return Ok(published);
                        }
                        Some(Err(err)) => {
                            tracing::error!(error = %err, published, "publish attempts exhausted");
                            return Err(err);
                        }
                        Some(Ok(_)) => published += 1,
                    }
                }
            }
        }
    }
}
