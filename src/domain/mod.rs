pub mod errors;
pub mod timestamp;
