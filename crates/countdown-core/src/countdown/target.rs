use chrono::{DateTime, FixedOffset, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Built-in target: 14 Nov 2025, 08:00 São Paulo time.
pub const DEFAULT_TARGET: &str = "2025-11-14T08:00:00-03:00";

/// Timezone the target is displayed in, independent of the viewer's zone.
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// The fixed instant a countdown runs toward.
///
/// The instant is absolute; `timezone` is only a display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetInstant {
    at: DateTime<FixedOffset>,
    timezone: Tz,
}

impl TargetInstant {
    pub fn new(at: DateTime<FixedOffset>, timezone: Tz) -> Self {
        Self { at, timezone }
    }

    /// Parse an RFC 3339 timestamp with explicit offset plus an IANA zone name.
    ///
    /// # Errors
    ///
    /// Returns `MissingOffset` for floating local times, `InvalidTimestamp`
    /// for anything else that is not RFC 3339, and `UnknownTimezone` when the
    /// zone name is not in the tz database.
    pub fn parse(timestamp: &str, timezone: &str) -> Result<Self, ValidationError> {
        let at = parse_timestamp(timestamp)?;
        let timezone = parse_timezone(timezone)?;
        Ok(Self { at, timezone })
    }

    /// The built-in target and display zone.
    pub fn builtin() -> Result<Self, ValidationError> {
        Self::parse(DEFAULT_TARGET, DEFAULT_TIMEZONE)
    }

    pub fn at(&self) -> &DateTime<FixedOffset> {
        &self.at
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The target expressed in its display timezone.
    pub fn local(&self) -> DateTime<Tz> {
        self.at.with_timezone(&self.timezone)
    }
}

/// Parse an RFC 3339 timestamp, rejecting values without a UTC offset.
pub fn parse_timestamp(input: &str) -> Result<DateTime<FixedOffset>, ValidationError> {
    let trimmed = input.trim();
    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(at) => Ok(at),
        Err(_) if is_floating(trimmed) => Err(ValidationError::MissingOffset {
            input: input.to_string(),
        }),
        Err(_) => Err(ValidationError::InvalidTimestamp {
            input: input.to_string(),
        }),
    }
}

/// Date-times that would be valid RFC 3339 apart from the missing offset.
const FLOATING_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn is_floating(input: &str) -> bool {
    FLOATING_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(input, fmt).is_ok())
}

/// Resolve an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz, ValidationError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ValidationError::UnknownTimezone(name.to_string()))
}
