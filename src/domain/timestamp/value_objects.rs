use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};
use std::{fmt, str::FromStr};

/// Human-readable rendering used for every epoch shown to clients.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Years `%Y` renders as exactly four digits.
const DISPLAY_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Whole seconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(i64);

impl Epoch {
    pub const fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self(instant.timestamp())
    }

    /// Parse the decimal form kept in the store.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|err| DomainError::Malformed(format!("{raw:?} is not an integer epoch: {err}")))
    }

    pub const fn as_secs(self) -> i64 {
        self.0
    }

    pub fn to_datetime(self) -> DomainResult<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0).ok_or(DomainError::OutOfRange(self.0))
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Epoch {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Epoch> for i64 {
    fn from(value: Epoch) -> Self {
        value.0
    }
}

/// Fixed UTC offset used to render epochs for display.
///
/// Rendering never consults the host's local zone: two deployments with the
/// same configured offset always produce the same text for the same epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone(FixedOffset);

impl DisplayZone {
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    /// Accepts `Z`, `UTC` or a signed `±HH:MM` offset.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
            return Ok(Self::utc());
        }
        if !is_hh_mm_offset(trimmed) {
            return Err(DomainError::Malformed(format!(
                "invalid utc offset {raw:?}: expected Z, UTC or [+-]HH:MM"
            )));
        }
        trimmed
            .parse::<FixedOffset>()
            .map(Self)
            .map_err(|err| DomainError::Malformed(format!("invalid utc offset {raw:?}: {err}")))
    }

    /// Render `epoch` as `YYYY-MM-DD HH:MM:SS` in this zone.
    pub fn format(&self, epoch: Epoch) -> DomainResult<String> {
        // Both the instant and its shifted wall-clock reading must be representable.
        epoch.to_datetime()?;
        let local_secs = epoch
            .as_secs()
            .checked_add(i64::from(self.0.local_minus_utc()))
            .ok_or(DomainError::OutOfRange(epoch.as_secs()))?;
        let local = DateTime::from_timestamp(local_secs, 0)
            .ok_or(DomainError::OutOfRange(epoch.as_secs()))?
            .naive_utc();
        if !DISPLAY_YEARS.contains(&local.year()) {
            return Err(DomainError::OutOfRange(epoch.as_secs()));
        }
        Ok(local.format(DISPLAY_FORMAT).to_string())
    }
}

fn is_hh_mm_offset(raw: &str) -> bool {
    match raw.as_bytes() {
        [sign, h1, h2, b':', m1, m2] => {
            matches!(sign, b'+' | b'-')
                && [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
