// src/application/queries/timestamps/service.rs
use std::sync::Arc;

use crate::{application::ports::store::KeyValueStore, domain::timestamp::DisplayZone};

/// Read side of the time record. Stateless apart from the injected store
/// handle, so calls may run concurrently.
pub struct TimestampQueryService {
    pub(super) store: Arc<dyn KeyValueStore>,
    pub(super) zone: DisplayZone,
}

impl TimestampQueryService {
    pub fn new(store: Arc<dyn KeyValueStore>, zone: DisplayZone) -> Self {
        Self { store, zone }
    }
}
