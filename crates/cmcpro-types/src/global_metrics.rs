//! Global market metrics.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::serde_util::null_as_default;
use crate::timestamp::Timestamp;

/// Aggregate quotes keyed by convert symbol or id.
pub type GlobalQuoteMap = HashMap<String, GlobalQuote>;

/// Market-wide statistics across all tracked currencies and exchanges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalMetrics {
    /// Bitcoin's share of total market cap, in percent.
    #[serde(deserialize_with = "null_as_default")]
    pub btc_dominance: f64,
    /// Ethereum's share of total market cap, in percent.
    #[serde(deserialize_with = "null_as_default")]
    pub eth_dominance: f64,
    /// Currencies with recent market activity.
    #[serde(deserialize_with = "null_as_default")]
    pub active_cryptocurrencies: u64,
    /// All currencies ever listed.
    #[serde(deserialize_with = "null_as_default")]
    pub total_cryptocurrencies: u64,
    /// Trading pairs with recent activity.
    #[serde(deserialize_with = "null_as_default")]
    pub active_market_pairs: u64,
    /// Exchanges with recent activity.
    #[serde(deserialize_with = "null_as_default")]
    pub active_exchanges: u64,
    /// All exchanges ever listed.
    #[serde(deserialize_with = "null_as_default")]
    pub total_exchanges: u64,
    /// Last time the metrics were refreshed.
    pub last_updated: Timestamp,
    /// Aggregates per convert currency.
    #[serde(deserialize_with = "null_as_default")]
    pub quote: GlobalQuoteMap,
}

/// Market-wide aggregates in one convert currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalQuote {
    /// Sum of all market caps.
    #[serde(deserialize_with = "null_as_default")]
    pub total_market_cap: f64,
    /// Adjusted 24h volume across all markets.
    #[serde(deserialize_with = "null_as_default")]
    pub total_volume_24h: f64,
    /// Reported 24h volume across all markets.
    #[serde(deserialize_with = "null_as_default")]
    pub total_volume_24h_reported: f64,
    /// Adjusted 24h volume excluding Bitcoin.
    #[serde(deserialize_with = "null_as_default")]
    pub altcoin_volume_24h: f64,
    /// Reported 24h volume excluding Bitcoin.
    #[serde(deserialize_with = "null_as_default")]
    pub altcoin_volume_24h_reported: f64,
    /// Market cap excluding Bitcoin.
    #[serde(deserialize_with = "null_as_default")]
    pub altcoin_market_cap: f64,
    /// Last time this quote was refreshed.
    pub last_updated: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_metrics_decode() {
        let json = r#"{
            "btc_dominance": 52.31,
            "eth_dominance": 17.02,
            "active_cryptocurrencies": 8874,
            "total_cryptocurrencies": 26000,
            "active_market_pairs": 64000,
            "active_exchanges": 700,
            "total_exchanges": 7000,
            "last_updated": "2024-01-15T12:30:00.000Z",
            "quote": {
                "USD": {
                    "total_market_cap": 1650000000000.0,
                    "total_volume_24h": 48000000000.0,
                    "total_volume_24h_reported": 1200000000000.0,
                    "altcoin_volume_24h": 30000000000.0,
                    "altcoin_volume_24h_reported": 800000000000.0,
                    "altcoin_market_cap": 790000000000.0,
                    "last_updated": "2024-01-15T12:30:00.000Z"
                }
            }
        }"#;

        let metrics: GlobalMetrics = serde_json::from_str(json).unwrap();
        assert!((metrics.btc_dominance - 52.31).abs() < 1e-9);
        assert_eq!(metrics.active_cryptocurrencies, 8874);
        assert_eq!(metrics.last_updated.to_string(), "2024-01-15T12:30:00Z");

        let usd = &metrics.quote["USD"];
        assert!((usd.total_market_cap - 1.65e12).abs() < 1.0);
    }

    #[test]
    fn test_global_metrics_tolerates_sparse_payload() {
        let metrics: GlobalMetrics =
            serde_json::from_str(r#"{"btc_dominance": null, "quote": null}"#).unwrap();
        assert!(metrics.btc_dominance.abs() < f64::EPSILON);
        assert!(metrics.quote.is_empty());
        assert!(metrics.last_updated.is_zero());
    }
}
