// src/domain/timestamp/mod.rs
mod value_objects;

pub use value_objects::{DisplayZone, Epoch};

/// The single store key holding the shared time record.
pub const TIMESTAMP_KEY: &str = "current_timestamp";
