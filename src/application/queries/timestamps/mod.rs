// src/application/queries/timestamps/mod.rs
mod current;
mod service;

pub use service::TimestampQueryService;
