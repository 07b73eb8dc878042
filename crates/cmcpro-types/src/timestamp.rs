//! Timestamp codec for the vendor's RFC3339 wire format.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// RFC3339 rendering of the zero instant.
pub const ZERO_RFC3339: &str = "0001-01-01T00:00:00Z";

/// Unix seconds of `0001-01-01T00:00:00Z`.
const ZERO_UNIX_SECONDS: i64 = -62_135_596_800;

/// Error for wire timestamps that are neither empty nor valid RFC3339.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid RFC3339 timestamp {input:?}: {source}")]
pub struct TimestampError {
    /// The rejected wire value.
    input: String,
    /// Underlying parse failure.
    #[source]
    source: chrono::ParseError,
}

impl TimestampError {
    /// Returns the wire value that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A point in time as reported by the API.
///
/// The API sends RFC3339 strings, but leaves some fields empty or `null` when
/// there is no value (e.g. `last_historical_data` of a coin that never
/// traded). Those decode to [`Timestamp::ZERO`] instead of failing, so a
/// record with a blank date still deserializes.
///
/// # Example
///
/// ```
/// use cmcpro_types::Timestamp;
///
/// let ts: Timestamp = "2019-05-21T11:07:03.000Z".parse().unwrap();
/// assert_eq!(ts.to_string(), "2019-05-21T11:07:03Z");
///
/// let blank: Timestamp = "".parse().unwrap();
/// assert!(blank.is_zero());
/// assert_eq!(blank.to_string(), "0001-01-01T00:00:00Z");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    /// The sentinel for "no value".
    pub const ZERO: Self = Self(None);

    /// Decodes a wire value.
    ///
    /// `""`, `"null"` and the two-character literal `""` all yield
    /// [`Timestamp::ZERO`]. Anything else must be strict RFC3339.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError`] if the value is not valid RFC3339.
    pub fn parse(raw: &str) -> Result<Self, TimestampError> {
        if matches!(raw, "" | "null" | "\"\"") {
            return Ok(Self::ZERO);
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|parsed| Self::from(parsed.with_timezone(&Utc)))
            .map_err(|source| TimestampError {
                input: raw.to_string(),
                source,
            })
    }

    /// Returns true for the "no value" sentinel.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the instant, or `None` for the sentinel.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Encodes as RFC3339 in UTC, keeping sub-second digits only when present.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.map_or_else(
            || ZERO_RFC3339.to_string(),
            |instant| instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        )
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        if instant.timestamp() == ZERO_UNIX_SECONDS && instant.timestamp_subsec_nanos() == 0 {
            Self::ZERO
        } else {
            Self(Some(instant))
        }
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::ZERO),
            Some(raw) => Self::parse(&raw).map_err(serde::de::Error::custom),
        }
    }
}
