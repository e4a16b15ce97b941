use anyhow::Result;
use std::sync::Arc;
use timestamp_relay::{
    application::{
        commands::timestamps::{PublishScheduler, TimestampCommandService},
        ports::time::Clock,
    },
    config::AppConfig,
    infrastructure::{
        runtime::{init_tracing, shutdown_signal},
        store::{RedisKeyValueStore, redis_store},
        time::SystemClock,
    },
};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("info");

    let config = AppConfig::from_env()?;

    let store = redis_store::into_arc(RedisKeyValueStore::from_url(
        config.redis_url(),
        config.store_timeout(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let commands = Arc::new(TimestampCommandService::new(store, clock));

    let scheduler = PublishScheduler::new(
        commands,
        config.publish_interval(),
        config.publish_retry_policy(),
    );

    let published = scheduler.run(shutdown_signal()).await?;
    tracing::info!(published, "publisher stopped");
    Ok(())
}
