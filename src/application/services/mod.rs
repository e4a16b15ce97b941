// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{ports::store::KeyValueStore, queries::timestamps::TimestampQueryService},
    domain::timestamp::DisplayZone,
};

/// Services reachable from the read surface.
pub struct ApplicationServices {
    pub timestamp_queries: Arc<TimestampQueryService>,
}

impl ApplicationServices {
    pub fn new(store: Arc<dyn KeyValueStore>, zone: DisplayZone) -> Self {
        let timestamp_queries = Arc::new(TimestampQueryService::new(store, zone));
        Self { timestamp_queries }
    }
}
