use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use timestamp_relay::{
    application::services::ApplicationServices,
    config::AppConfig,
    infrastructure::{
        runtime::{init_tracing, shutdown_signal},
        store::{RedisKeyValueStore, redis_store},
    },
    presentation::http::{routes::build_router, state::HttpState},
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
    init_tracing("info,tower_http=info");

    let config = AppConfig::from_env()?;

    let store = RedisKeyValueStore::from_url(config.redis_url(), config.store_timeout())?;
    if let Err(err) = store.ping().await {
        // Reads fail with 503 until the store comes up; the service itself stays up.
        tracing::warn!(error = %err, "redis not reachable at startup");
    }
    let store = redis_store::into_arc(store);

    let services = Arc::new(ApplicationServices::new(store, config.display_zone()));
    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(zone = %config.display_zone(), "listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
