use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Snapshot of the shared time record as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimestampDto {
    /// Seconds since the Unix epoch, exactly as stored.
    #[schema(example = 1_640_995_200)]
    pub epoch: i64,
    /// `YYYY-MM-DD HH:MM:SS` in the service's configured display zone.
    #[schema(example = "2022-01-01 00:00:00")]
    pub human_readable: String,
}
