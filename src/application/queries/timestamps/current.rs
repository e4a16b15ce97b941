// src/application/queries/timestamps/current.rs
use super::TimestampQueryService;
use crate::{
    application::{
        dto::TimestampDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::timestamp::{Epoch, TIMESTAMP_KEY},
};

impl TimestampQueryService {
    /// Read the shared record and return the stored epoch unchanged.
    ///
    /// An absent or empty value is `Unavailable`; anything that is not an
    /// integer is `MalformedRecord`. The age of the value is not checked.
    pub async fn get_current_timestamp(&self) -> ApplicationResult<Epoch> {
        let raw = match self.store.get(TIMESTAMP_KEY).await? {
            Some(value) if !value.is_empty() => value,
            _ => return Err(ApplicationError::unavailable()),
        };

        Epoch::parse(&raw).map_err(|err| {
            tracing::warn!(key = TIMESTAMP_KEY, error = %err, "stored timestamp is malformed");
            ApplicationError::malformed_record(err.to_string())
        })
    }

    /// Render `epoch` as `YYYY-MM-DD HH:MM:SS` in the configured display zone.
    pub fn convert_to_human_readable(&self, epoch: Epoch) -> ApplicationResult<String> {
        Ok(self.zone.format(epoch)?)
    }

    pub async fn current_time(&self) -> ApplicationResult<TimestampDto> {
        let epoch = self.get_current_timestamp().await?;
        // A stored value the calendar cannot represent is bad data, not a bad request.
        let human_readable = self.zone.format(epoch).map_err(|err| {
            tracing::warn!(key = TIMESTAMP_KEY, error = %err, "stored timestamp cannot be rendered");
            ApplicationError::malformed_record(err.to_string())
        })?;

        Ok(TimestampDto {
            epoch: epoch.into(),
            human_readable,
        })
    }
}
