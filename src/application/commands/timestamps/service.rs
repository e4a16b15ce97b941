// src/application/commands/timestamps/service.rs
use std::sync::Arc;

use crate::application::ports::{store::KeyValueStore, time::Clock};

/// Write side of the time record. Owns its store handle; nothing else in the
/// publisher process writes the record.
pub struct TimestampCommandService {
    pub(super) store: Arc<dyn KeyValueStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TimestampCommandService {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}
