//! Core types for the cmcpro CoinMarketCap client.
//!
//! This crate provides the records decoded from API payloads:
//!
//! - [`Timestamp`] - RFC3339 instant that tolerates blank wire values
//! - [`ListingStatus`] - Filter for the currency map
//! - [`CurrencyMap`], [`CurrencyInfo`], [`CurrencyListing`] - Cryptocurrency endpoints
//! - [`GlobalMetrics`] - Global market aggregates
//! - [`PriceConversion`] - Price conversion results

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cmcpro/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod conversion;
mod currency;
mod global_metrics;
mod listing_status;
mod serde_util;
mod timestamp;

pub use conversion::{ConversionQuote, ConversionQuoteMap, PriceConversion};
pub use currency::{
    CurrencyInfo, CurrencyInfoMap, CurrencyListing, CurrencyMap, CurrencyPlatform,
    CurrencyQuote, CurrencyQuoteMap, CurrencyQuotesMap, CurrencyUrls,
};
pub use global_metrics::{GlobalMetrics, GlobalQuote, GlobalQuoteMap};
pub use listing_status::{ListingStatus, ListingStatusParseError};
pub use timestamp::{Timestamp, TimestampError, ZERO_RFC3339};
