//! Listing status filter for the currency map.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which cryptocurrencies the currency map should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Currently listed and tracked.
    #[default]
    Active,
    /// No longer listed.
    Inactive,
    /// Listed but without tracked market data.
    Untracked,
}

impl ListingStatus {
    /// Returns the query parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Untracked => "untracked",
        }
    }

    /// Returns all listing statuses.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Active, Self::Inactive, Self::Untracked]
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = ListingStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "untracked" => Ok(Self::Untracked),
            _ => Err(ListingStatusParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid listing status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingStatusParseError(String);

impl std::fmt::Display for ListingStatusParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid listing status '{}', expected one of: active, inactive, untracked",
            self.0
        )
    }
}

impl std::error::Error for ListingStatusParseError {}
