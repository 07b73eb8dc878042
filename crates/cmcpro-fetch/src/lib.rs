//! HTTP transport and endpoint methods for the cmcpro CoinMarketCap client.
//!
//! This crate provides the request/response pipeline:
//!
//! - [`CmcClient`] - Authenticated GET with a per-call timeout race
//! - [`unwrap_envelope`] - Response envelope parsing and vendor error check
//! - [`Query`] - Ordered query parameters
//! - [`endpoint`] - Endpoint paths and URL construction
//!
//! Endpoint methods (`currency_map`, `listings_latest_by_id`,
//! `price_conversion_by_symbol`, ...) are defined on [`CmcClient`].

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cmcpro/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod cryptocurrency;
pub mod endpoint;
mod envelope;
mod error;
mod global_metrics;
mod query;
mod tools;

pub use client::{API_KEY_ENV, API_KEY_HEADER, ClientConfig, CmcClient, DEFAULT_TIMEOUT};
pub use envelope::{Envelope, ResponseStatus, unwrap_envelope};
pub use error::{ApiError, ApiResult, ErrorKind};
pub use query::Query;
