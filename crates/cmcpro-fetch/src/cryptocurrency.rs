//! Cryptocurrency endpoints.

use cmcpro_types::{CurrencyInfoMap, CurrencyListing, CurrencyMap, CurrencyQuotesMap, ListingStatus};

use crate::client::CmcClient;
use crate::endpoint::{
    CURRENCY_INFO, CURRENCY_LISTINGS_LATEST, CURRENCY_MAP, CURRENCY_QUOTES_LATEST,
};
use crate::error::ApiResult;
use crate::query::Query;

/// Page size used by the "all" convenience calls.
const ALL_LIMIT: u32 = 5000;

/// Convert list used by [`CmcClient::listings_latest_all`].
const ALL_CONVERT: &str = "BTC,USD";

impl CmcClient {
    /// Returns the mapping of cryptocurrencies to CoinMarketCap ids, ordered
    /// by rank.
    ///
    /// Prefer ids over symbols when referring to currencies in other calls;
    /// symbols are not unique. `symbol` narrows the result to a
    /// comma-separated list of symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn currency_map(
        &self,
        status: ListingStatus,
        start: u32,
        limit: u32,
        symbol: Option<&str>,
    ) -> ApiResult<Vec<CurrencyMap>> {
        let query = Query::new()
            .param("listing_status", status)
            .param("start", start)
            .param("limit", limit)
            .param("sort", "cmc_rank")
            .optional("symbol", symbol);
        self.get(CURRENCY_MAP, &query).await
    }

    /// Returns the id map of all active currencies (up to 5000).
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn currency_map_all_active(&self) -> ApiResult<Vec<CurrencyMap>> {
        let query = Query::new()
            .param("listing_status", ListingStatus::Active)
            .param("limit", ALL_LIMIT);
        self.get(CURRENCY_MAP, &query).await
    }

    /// Returns static metadata (logo, description, links) for a
    /// comma-separated list of CoinMarketCap ids, keyed by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn currency_info_by_id(&self, id: &str) -> ApiResult<CurrencyInfoMap> {
        self.get(CURRENCY_INFO, &Query::new().param("id", id)).await
    }

    /// Same as [`CmcClient::currency_info_by_id`], selecting by symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn currency_info_by_symbol(&self, symbol: &str) -> ApiResult<CurrencyInfoMap> {
        self.get(CURRENCY_INFO, &Query::new().param("symbol", symbol)).await
    }

    /// Returns a page of active currencies with latest market data, in
    /// market cap order, quoted in a comma-separated list of currency ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn listings_latest_by_id(
        &self,
        start: u32,
        limit: u32,
        convert_id: &str,
    ) -> ApiResult<Vec<CurrencyListing>> {
        let query = Query::new()
            .param("start", start)
            .param("limit", limit)
            .optional("convert_id", Some(convert_id));
        self.get(CURRENCY_LISTINGS_LATEST, &query).await
    }

    /// Same as [`CmcClient::listings_latest_by_id`], quoting by symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn listings_latest_by_symbol(
        &self,
        start: u32,
        limit: u32,
        convert: &str,
    ) -> ApiResult<Vec<CurrencyListing>> {
        let query = Query::new()
            .param("start", start)
            .param("limit", limit)
            .optional("convert", Some(convert));
        self.get(CURRENCY_LISTINGS_LATEST, &query).await
    }

    /// Returns the first 5000 listings quoted in BTC and USD.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn listings_latest_all(&self) -> ApiResult<Vec<CurrencyListing>> {
        let query = Query::new()
            .param("convert", ALL_CONVERT)
            .param("start", 1)
            .param("limit", ALL_LIMIT);
        self.get(CURRENCY_LISTINGS_LATEST, &query).await
    }

    /// Returns the latest market quote for a comma-separated list of ids,
    /// keyed by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn quotes_latest_by_id(
        &self,
        id: &str,
        convert_id: &str,
    ) -> ApiResult<CurrencyQuotesMap> {
        let query = Query::new()
            .param("id", id)
            .optional("convert_id", Some(convert_id));
        self.get(CURRENCY_QUOTES_LATEST, &query).await
    }

    /// Same as [`CmcClient::quotes_latest_by_id`], using symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn quotes_latest_by_symbol(
        &self,
        symbol: &str,
        convert: &str,
    ) -> ApiResult<CurrencyQuotesMap> {
        let query = Query::new()
            .param("symbol", symbol)
            .optional("convert", Some(convert));
        self.get(CURRENCY_QUOTES_LATEST, &query).await
    }
}
