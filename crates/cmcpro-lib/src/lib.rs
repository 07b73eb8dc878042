//! Typed Rust client for the CoinMarketCap Pro API.
//!
//! This is a facade crate that re-exports functionality from the cmcpro
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use cmcpro_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CmcClient::with_api_key("")?; // falls back to CMC_PRO_API_KEY
//!
//!     let map = client.currency_map(ListingStatus::Active, 1, 50, None).await?;
//!     for entry in &map {
//!         println!("{:>6} {}", entry.id, entry.symbol);
//!     }
//!
//!     let conversion = client.price_conversion_by_symbol(1.5, "BTC", "USD").await?;
//!     println!("1.5 BTC = {:?} USD", conversion.price_in("USD"));
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cmcpro/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use cmcpro_types::*;

// Re-export the client
#[cfg(feature = "fetch")]
pub use cmcpro_fetch::{
    API_KEY_ENV, ApiError, ApiResult, ClientConfig, CmcClient, ErrorKind, Query, ResponseStatus,
    endpoint, unwrap_envelope,
};

/// Prelude module for convenient imports.
///
/// ```
/// use cmcpro_lib::prelude::*;
/// ```
pub mod prelude {
    pub use cmcpro_types::{
        CurrencyInfo, CurrencyInfoMap, CurrencyListing, CurrencyMap, CurrencyQuote,
        CurrencyQuotesMap, GlobalMetrics, ListingStatus, PriceConversion, Timestamp,
    };

    #[cfg(feature = "fetch")]
    pub use cmcpro_fetch::{ApiError, ApiResult, ClientConfig, CmcClient, ErrorKind};
}
