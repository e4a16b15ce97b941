pub mod runtime;
pub mod store;
pub mod time;
