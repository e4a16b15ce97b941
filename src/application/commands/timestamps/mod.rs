// src/application/commands/timestamps/mod.rs
mod publish;
mod retry;
mod schedule;
mod service;

pub use retry::RetryPolicy;
pub use schedule::PublishScheduler;
pub use service::TimestampCommandService;
