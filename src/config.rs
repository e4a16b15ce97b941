// src/config.rs
use crate::{application::commands::timestamps::RetryPolicy, domain::timestamp::DisplayZone};
use std::{env, fmt::Display, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    redis_url: String,
    listen_addr: String,
    publish_interval: Duration,
    publish_max_attempts: u32,
    publish_retry_backoff: Duration,
    store_timeout: Duration,
    display_zone: DisplayZone,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_redis_host() -> String {
    "redis".into()
}

const fn default_redis_port() -> u16 {
    6379
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".into()
}

const fn default_publish_interval_secs() -> u64 {
    5
}

const fn default_publish_max_attempts() -> u32 {
    3
}

const fn default_publish_retry_backoff_ms() -> u64 {
    200
}

const fn default_store_timeout_ms() -> u64 {
    2000
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the ones that are present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redis_url = match non_empty(&lookup, "REDIS_URL") {
            Some(url) => url,
            None => {
                let host = non_empty(&lookup, "REDIS_HOST").unwrap_or_else(default_redis_host);
                let port = parse_or(&lookup, "REDIS_PORT", default_redis_port())?;
                format!("redis://{host}:{port}")
            }
        };

        let mut listen_addr = non_empty(&lookup, "LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        if let Some(port) = non_empty(&lookup, "SERVICE_PORT") {
            let port: u16 = port
                .parse()
                .map_err(|err| ConfigError::Invalid(format!("SERVICE_PORT={port:?}: {err}")))?;
            let host = listen_addr
                .rsplit_once(':')
                .map_or(listen_addr.as_str(), |(host, _)| host);
            listen_addr = format!("{host}:{port}");
        }

        let interval_secs = parse_or(&lookup, "SCHEDULE_INTERVAL", default_publish_interval_secs())?;
        if interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "SCHEDULE_INTERVAL must be at least 1 second".into(),
            ));
        }

        let publish_max_attempts =
            parse_or(&lookup, "PUBLISH_MAX_ATTEMPTS", default_publish_max_attempts())?;
        if publish_max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "PUBLISH_MAX_ATTEMPTS must be at least 1".into(),
            ));
        }

        let backoff_ms = parse_or(
            &lookup,
            "PUBLISH_RETRY_BACKOFF_MS",
            default_publish_retry_backoff_ms(),
        )?;

        let store_timeout_ms = parse_or(&lookup, "STORE_TIMEOUT_MS", default_store_timeout_ms())?;
        if store_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "STORE_TIMEOUT_MS must be at least 1".into(),
            ));
        }

        let display_zone = match non_empty(&lookup, "DISPLAY_UTC_OFFSET") {
            Some(raw) => DisplayZone::parse(&raw)
                .map_err(|err| ConfigError::Invalid(format!("DISPLAY_UTC_OFFSET: {err}")))?,
            None => DisplayZone::utc(),
        };

        Ok(Self {
            redis_url,
            listen_addr,
            publish_interval: Duration::from_secs(interval_secs),
            publish_max_attempts,
            publish_retry_backoff: Duration::from_millis(backoff_ms),
            store_timeout: Duration::from_millis(store_timeout_ms),
            display_zone,
        })
    }

    pub fn redis_url(&self) -> &str {
        &self.redis_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub const fn publish_interval(&self) -> Duration {
        self.publish_interval
    }

    pub const fn store_timeout(&self) -> Duration {
        self.store_timeout
    }

    pub const fn display_zone(&self) -> DisplayZone {
        self.display_zone
    }

    /// Retry policy for a single scheduled publish. Backoff never exceeds the
    /// publish interval.
    pub fn publish_retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.publish_max_attempts,
            self.publish_retry_backoff,
            self.publish_interval,
        )
    }
}

fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match non_empty(lookup, name) {
        Some(raw) => raw
            .parse()
            .map_err(|err| ConfigError::Invalid(format!("{name}={raw:?}: {err}"))),
        None => Ok(default),
    }
}
