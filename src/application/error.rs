// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Message surfaced to clients when no usable record exists.
pub const TIMESTAMP_NOT_AVAILABLE: &str = "Timestamp not available";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No value, or an empty value, under the record key.
    #[error("{0}")]
    Unavailable(String),

    /// A value exists but cannot be interpreted as an epoch.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// The store could not be reached, or did not answer in time.
    #[error("store connection failure: {0}")]
    StoreConnection(String),
}

impl ApplicationError {
    pub fn unavailable() -> Self {
        Self::Unavailable(TIMESTAMP_NOT_AVAILABLE.into())
    }

    pub fn malformed_record(msg: impl Into<String>) -> Self {
        Self::MalformedRecord(msg.into())
    }

    pub fn store_connection(msg: impl Into<String>) -> Self {
        Self::StoreConnection(msg.into())
    }

    /// Only transport failures are worth another attempt; data problems are not.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreConnection(_))
    }
}
