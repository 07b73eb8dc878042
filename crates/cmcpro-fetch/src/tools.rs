//! Tool endpoints.

use cmcpro_types::PriceConversion;

use crate::client::CmcClient;
use crate::endpoint::PRICE_CONVERSION;
use crate::error::{ApiError, ApiResult};
use crate::query::Query;

impl CmcClient {
    /// Converts `amount` of the currency `id` into each currency of the
    /// comma-separated `convert_id` list at the latest market rate.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if `amount` is not finite, or an
    /// error if the call fails or the payload does not decode.
    pub async fn price_conversion_by_id(
        &self,
        amount: f64,
        id: &str,
        convert_id: &str,
    ) -> ApiResult<PriceConversion> {
        check_amount(amount)?;
        let query = Query::new()
            .optional("convert_id", Some(convert_id))
            .param("id", id)
            .param("amount", amount);
        self.get(PRICE_CONVERSION, &query).await
    }

    /// Same as [`CmcClient::price_conversion_by_id`], using symbols.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if `amount` is not finite, or an
    /// error if the call fails or the payload does not decode.
    pub async fn price_conversion_by_symbol(
        &self,
        amount: f64,
        symbol: &str,
        convert: &str,
    ) -> ApiResult<PriceConversion> {
        check_amount(amount)?;
        let query = Query::new()
            .optional("convert", Some(convert))
            .param("symbol", symbol)
            .param("amount", amount);
        self.get(PRICE_CONVERSION, &query).await
    }
}

fn check_amount(amount: f64) -> ApiResult<()> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(ApiError::InvalidRequest(format!(
            "amount must be a finite number, got {amount}"
        )))
    }
}
