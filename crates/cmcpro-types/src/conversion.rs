//! Price conversion results.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::serde_util::null_as_default;
use crate::timestamp::Timestamp;

/// Converted amounts keyed by target symbol or id.
pub type ConversionQuoteMap = HashMap<String, ConversionQuote>;

/// An amount of one currency expressed in one or more others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceConversion {
    /// CoinMarketCap id of the source currency.
    pub id: u64,
    /// Source currency name.
    pub name: String,
    /// Source currency symbol.
    pub symbol: String,
    /// Amount that was converted.
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    /// Time of the rate used for the source currency.
    pub last_updated: Timestamp,
    /// Result per target currency.
    #[serde(deserialize_with = "null_as_default")]
    pub quote: ConversionQuoteMap,
}

impl PriceConversion {
    /// Returns the converted price in `convert`.
    #[must_use]
    pub fn price_in(&self, convert: &str) -> Option<f64> {
        self.quote.get(convert).map(|quote| quote.price)
    }
}

/// Converted amount in one target currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionQuote {
    /// The converted amount (not a unit price).
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    /// Time of the rate used for the target currency.
    pub last_updated: Timestamp,
}
