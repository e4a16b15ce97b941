// src/application/ports/mod.rs
pub mod store;
pub mod time;
