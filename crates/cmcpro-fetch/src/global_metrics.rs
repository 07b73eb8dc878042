//! Global metrics endpoints.

use cmcpro_types::GlobalMetrics;

use crate::client::CmcClient;
use crate::endpoint::GLOBAL_QUOTES_LATEST;
use crate::error::ApiResult;
use crate::query::Query;

impl CmcClient {
    /// Returns the latest global market metrics, quoted in a comma-separated
    /// list of currency ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn global_quotes_latest_by_id(&self, convert_id: &str) -> ApiResult<GlobalMetrics> {
        let query = Query::new().optional("convert_id", Some(convert_id));
        self.get(GLOBAL_QUOTES_LATEST, &query).await
    }

    /// Same as [`CmcClient::global_quotes_latest_by_id`], quoting by symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn global_quotes_latest_by_symbol(&self, convert: &str) -> ApiResult<GlobalMetrics> {
        let query = Query::new().optional("convert", Some(convert));
        self.get(GLOBAL_QUOTES_LATEST, &query).await
    }
}
