// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed value: {0}")]
    Malformed(String),
    #[error("epoch {0} is outside the representable date range")]
    OutOfRange(i64),
}
