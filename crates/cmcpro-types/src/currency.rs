//! Cryptocurrency records: map entries, metadata, listings and quotes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::serde_util::null_as_default;
use crate::timestamp::Timestamp;

/// Metadata keyed by the requested id or symbol.
pub type CurrencyInfoMap = HashMap<String, CurrencyInfo>;

/// Market quotes keyed by convert symbol or id (e.g. `"USD"`, `"2781"`).
pub type CurrencyQuoteMap = HashMap<String, CurrencyQuote>;

/// Latest listing per requested id or symbol, as returned by quotes-latest.
pub type CurrencyQuotesMap = HashMap<String, CurrencyListing>;

/// One entry of the id map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyMap {
    /// CoinMarketCap id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Ticker symbol. Not unique across currencies.
    pub symbol: String,
    /// URL-friendly name.
    pub slug: String,
    /// 1 if the currency is currently listed.
    #[serde(deserialize_with = "null_as_default")]
    pub is_active: u8,
    /// Rank by market cap, absent for inactive currencies.
    pub rank: Option<u32>,
    /// First date with historical data.
    pub first_historical_data: Timestamp,
    /// Last date with historical data.
    pub last_historical_data: Timestamp,
    /// Parent chain for tokens.
    pub platform: Option<CurrencyPlatform>,
}

impl CurrencyMap {
    /// Returns true if the currency is currently listed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active == 1
    }
}

/// The chain a token is issued on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyPlatform {
    /// CoinMarketCap id of the platform currency.
    pub id: u64,
    /// Platform name (e.g. `Ethereum`).
    pub name: String,
    /// Platform symbol.
    pub symbol: String,
    /// Platform slug.
    pub slug: String,
    /// Contract address of the token on the platform.
    #[serde(deserialize_with = "null_as_default")]
    pub token_address: String,
}

/// Project links from the metadata endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyUrls {
    /// Official websites.
    pub website: Vec<String>,
    /// Whitepapers and technical documentation.
    pub technical_doc: Vec<String>,
    /// Block explorers.
    pub explorer: Vec<String>,
    /// Source repositories.
    pub source_code: Vec<String>,
    /// Forums.
    pub message_board: Vec<String>,
    /// Chat rooms.
    pub chat: Vec<String>,
    /// Announcement threads.
    pub announcement: Vec<String>,
    /// Subreddits.
    pub reddit: Vec<String>,
    /// Twitter accounts.
    pub twitter: Vec<String>,
}

/// Static metadata for one currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyInfo {
    /// CoinMarketCap id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// `coin` or `token`.
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    /// URL-friendly name.
    pub slug: String,
    /// Logo image URL.
    #[serde(deserialize_with = "null_as_default")]
    pub logo: String,
    /// Project description.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Date the currency was added to CoinMarketCap.
    pub date_added: Timestamp,
    /// Markdown notice about the currency, usually empty.
    #[serde(deserialize_with = "null_as_default")]
    pub notice: String,
    /// Tags such as `mineable`.
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Parent chain for tokens.
    pub platform: Option<CurrencyPlatform>,
    /// Project links.
    pub urls: Option<CurrencyUrls>,
}

/// A currency with its latest market data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyListing {
    /// CoinMarketCap id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// URL-friendly name.
    pub slug: String,
    /// Rank by market cap.
    #[serde(deserialize_with = "null_as_default")]
    pub cmc_rank: u32,
    /// Number of active trading pairs.
    #[serde(deserialize_with = "null_as_default")]
    pub num_market_pairs: u32,
    /// Approximate number of coins in circulation.
    #[serde(deserialize_with = "null_as_default")]
    pub circulating_supply: f64,
    /// Coins in existence minus any burned.
    #[serde(deserialize_with = "null_as_default")]
    pub total_supply: f64,
    /// Market cap computed from total supply.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub market_cap_by_total_supply: f64,
    /// Hard cap on supply, `None` when uncapped.
    pub max_supply: Option<f64>,
    /// Last time market data was refreshed.
    pub last_updated: Timestamp,
    /// Date the currency was added to CoinMarketCap.
    pub date_added: Timestamp,
    /// Tags such as `mineable`.
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Parent chain for tokens.
    pub platform: Option<CurrencyPlatform>,
    /// Market data per convert currency.
    #[serde(deserialize_with = "null_as_default")]
    pub quote: CurrencyQuoteMap,
}

impl CurrencyListing {
    /// Returns the quote in `convert` (symbol or id as requested).
    #[must_use]
    pub fn quote_in(&self, convert: &str) -> Option<&CurrencyQuote> {
        self.quote.get(convert)
    }
}

/// Market data of a currency in one convert currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyQuote {
    /// Price in the convert currency.
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    /// Adjusted 24h trading volume.
    #[serde(deserialize_with = "null_as_default")]
    pub volume_24h: f64,
    /// Reported 24h trading volume.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub volume_24h_reported: f64,
    /// Adjusted 7d trading volume.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub volume_7d: f64,
    /// Reported 7d trading volume.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub volume_7d_reported: f64,
    /// Adjusted 30d trading volume.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub volume_30d: f64,
    /// Reported 30d trading volume.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub volume_30d_reported: f64,
    /// Market capitalization.
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap: f64,
    /// Price change over the last hour, in percent.
    #[serde(deserialize_with = "null_as_default")]
    pub percent_change_1h: f64,
    /// Price change over 24 hours, in percent.
    #[serde(deserialize_with = "null_as_default")]
    pub percent_change_24h: f64,
    /// Price change over 7 days, in percent.
    #[serde(deserialize_with = "null_as_default")]
    pub percent_change_7d: f64,
    /// Last time this quote was refreshed.
    pub last_updated: Timestamp,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}
