//! Endpoint paths and URL construction.

/// Production API domain.
pub const DEFAULT_DOMAIN: &str = "https://pro-api.coinmarketcap.com";

/// Sandbox API domain, serving mock data for testing.
pub const SANDBOX_DOMAIN: &str = "https://sandbox-api.coinmarketcap.com";

/// API version path segment.
pub const DEFAULT_VERSION: &str = "v1";

/// Currency id map.
pub const CURRENCY_MAP: &str = "cryptocurrency/map";

/// Currency static metadata.
pub const CURRENCY_INFO: &str = "cryptocurrency/info";

/// Paginated latest listings.
pub const CURRENCY_LISTINGS_LATEST: &str = "cryptocurrency/listings/latest";

/// Latest quotes for selected currencies.
pub const CURRENCY_QUOTES_LATEST: &str = "cryptocurrency/quotes/latest";

/// Latest global market metrics.
pub const GLOBAL_QUOTES_LATEST: &str = "global-metrics/quotes/latest";

/// Price conversion tool.
pub const PRICE_CONVERSION: &str = "tools/price-conversion";

/// Builds the URL for an endpoint.
///
/// URL format: `{domain}/{version}/{path}`
///
/// # Example
///
/// ```
/// use cmcpro_fetch::endpoint::{CURRENCY_MAP, DEFAULT_DOMAIN, endpoint_url};
///
/// let url = endpoint_url(DEFAULT_DOMAIN, "v1", CURRENCY_MAP);
/// assert_eq!(url, "https://pro-api.coinmarketcap.com/v1/cryptocurrency/map");
/// ```
#[must_use]
pub fn endpoint_url(domain: &str, version: &str, path: &str) -> String {
    format!(
        "{}/{}/{}",
        domain.trim_end_matches('/'),
        version.trim_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url(DEFAULT_DOMAIN, DEFAULT_VERSION, GLOBAL_QUOTES_LATEST),
            "https://pro-api.coinmarketcap.com/v1/global-metrics/quotes/latest"
        );
    }

    #[test]
    fn test_endpoint_url_trims_slashes() {
        assert_eq!(
            endpoint_url(
                "https://sandbox-api.coinmarketcap.com/",
                "/v2/",
                "/tools/price-conversion"
            ),
            "https://sandbox-api.coinmarketcap.com/v2/tools/price-conversion"
        );
    }

    #[test]
    fn test_endpoint_url_keeps_custom_domain() {
        let url = endpoint_url("http://127.0.0.1:8080", DEFAULT_VERSION, CURRENCY_INFO);
        assert_eq!(url, "http://127.0.0.1:8080/v1/cryptocurrency/info");
    }
}
