//! HTTP transport for API calls.

use bytes::Bytes;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

use crate::endpoint::{DEFAULT_DOMAIN, DEFAULT_VERSION, SANDBOX_DOMAIN, endpoint_url};
use crate::envelope::unwrap_envelope;
use crate::error::{ApiError, ApiResult};
use crate::query::Query;

/// Environment variable read when no API key is given.
pub const API_KEY_ENV: &str = "CMC_PRO_API_KEY";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Default time limit for one call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the API client.
#[derive(Clone)]
pub struct ClientConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// Scheme and host, e.g. `https://pro-api.coinmarketcap.com`.
    pub domain: String,
    /// Version path segment, e.g. `v1`.
    pub version: String,
    /// Wall-clock limit per call, measured from dispatch.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a production configuration.
    ///
    /// An empty `api_key` falls back to the `CMC_PRO_API_KEY` environment
    /// variable.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: resolve_api_key(api_key.into(), std::env::var(API_KEY_ENV).ok()),
            domain: DEFAULT_DOMAIN.to_string(),
            version: DEFAULT_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("cmcpro/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Creates a configuration for the sandbox environment.
    #[must_use]
    pub fn sandbox(api_key: impl Into<String>) -> Self {
        Self::new(api_key).with_domain(SANDBOX_DOMAIN)
    }

    /// Sets the API domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Sets the API version segment.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the per-call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("domain", &self.domain)
            .field("version", &self.version)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn resolve_api_key(explicit: String, from_env: Option<String>) -> String {
    if explicit.is_empty() {
        from_env.unwrap_or_default()
    } else {
        explicit
    }
}

/// Statuses whose body is a response envelope rather than a transport failure.
const fn carries_envelope(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::OK
            | StatusCode::UNAUTHORIZED
            | StatusCode::PAYMENT_REQUIRED
            | StatusCode::FORBIDDEN
            | StatusCode::TOO_MANY_REQUESTS
    )
}

/// CoinMarketCap API client.
///
/// The client holds no mutable state and can be shared across tasks; clones
/// share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct CmcClient {
    http: Client,
    config: ClientConfig,
}

impl CmcClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = Client::builder()
            // Idle connections are reused across calls
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self::with_http_client(config, http))
    }

    /// Creates a client for the production API with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_api_key(api_key: impl Into<String>) -> ApiResult<Self> {
        Self::new(ClientConfig::new(api_key))
    }

    /// Creates a client that sends requests through `http`.
    ///
    /// The configured timeout is enforced on top of whatever timeouts `http`
    /// has.
    #[must_use]
    pub const fn with_http_client(config: ClientConfig, http: Client) -> Self {
        Self { http, config }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Calls an endpoint and deserializes its payload.
    ///
    /// `path` is relative to the version segment, e.g. `cryptocurrency/map`.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, transport failure, vendor error, or if
    /// the payload does not deserialize into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &Query) -> ApiResult<T> {
        let data = self.call(path, query).await?;
        Ok(serde_json::from_str(data.get())?)
    }

    /// Calls an endpoint and returns its payload undecoded.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, transport failure, or vendor error.
    pub async fn call(&self, path: &str, query: &Query) -> ApiResult<Box<RawValue>> {
        let body = self.send(path, query).await?;
        unwrap_envelope(&body)
    }

    /// Sends one GET request and returns the body.
    ///
    /// The round trip, body included, races a timer started at dispatch. If
    /// the timer wins the request future is dropped.
    async fn send(&self, path: &str, query: &Query) -> ApiResult<Bytes> {
        let url = endpoint_url(&self.config.domain, &self.config.version, path);
        let mut api_key = HeaderValue::from_str(&self.config.api_key).map_err(|e| {
            ApiError::InvalidRequest(format!("API key is not a valid header value: {e}"))
        })?;
        api_key.set_sensitive(true);
        let request = self
            .http
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(API_KEY_HEADER, api_key)
            .query(query.pairs())
            .build()?;

        debug!(path, url = %request.url(), "sending request");

        let round_trip = async {
            let response = self.http.execute(request).await?;
            let status = response.status();
            if !carries_envelope(status) {
                return Err(ApiError::Status { status });
            }
            let body = response.bytes().await?;
            Ok::<_, ApiError>((status, body))
        };

        tokio::select! {
            result = round_trip => {
                let (status, body) = result?;
                debug!(path, status = status.as_u16(), bytes = body.len(), "received response");
                Ok(body)
            }
            () = tokio::time::sleep(self.config.timeout) => {
                warn!(path, timeout = ?self.config.timeout, "request timed out");
                Err(ApiError::Timeout { timeout: self.config.timeout })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use mockito::{Matcher, Server};
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const OK_BODY: &str = r#"{"data": [1, 2, 3], "status": {"timestamp": "2024-01-15T12:30:00.000Z", "error_code": 0, "error_message": null, "elapsed": 5, "credit_count": 1}}"#;

    fn test_client(domain: &str, timeout: Duration) -> CmcClient {
        let config = ClientConfig::new("test-key")
            .with_domain(domain)
            .with_timeout(timeout);
        CmcClient::new(config).unwrap()
    }

    /// Serves `body` with status 200 after `delay`, once per connection.
    async fn delayed_server(delay: Duration, body: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut buf = [0_u8; 4096];
                    let _ = socket.read(&mut buf).await;
                    tokio::time::sleep(delay).await;
                    let response = format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                });
            }
        });
        addr
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::new("abc");
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.domain, DEFAULT_DOMAIN);
        assert_eq!(config.version, "v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_client_config_overrides() {
        let config = ClientConfig::sandbox("abc")
            .with_version("v2")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.domain, SANDBOX_DOMAIN);
        assert_eq!(config.version, "v2");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_api_key_env_fallback() {
        assert_eq!(resolve_api_key("explicit".into(), Some("env".into())), "explicit");
        assert_eq!(resolve_api_key(String::new(), Some("env".into())), "env");
        assert_eq!(resolve_api_key(String::new(), None), "");
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let rendered = format!("{:?}", ClientConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_envelope_statuses() {
        for status in [200, 401, 402, 403, 429] {
            assert!(carries_envelope(StatusCode::from_u16(status).unwrap()));
        }
        for status in [201, 204, 301, 400, 404, 500, 502, 503] {
            assert!(!carries_envelope(StatusCode::from_u16(status).unwrap()));
        }
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = CmcClient::with_api_key("abc");
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_sends_accept_and_key_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/cryptocurrency/info")
            .match_header("accept", "application/json")
            .match_header("x-cmc_pro_api_key", "test-key")
            .match_query(Matcher::UrlEncoded("symbol".into(), "BTC".into()))
            .with_status(200)
            .with_body(OK_BODY)
            .create_async()
            .await;

        let client = test_client(&server.url(), Duration::from_secs(5));
        let query = Query::new().param("symbol", "BTC");
        let data: Vec<u32> = client.get("cryptocurrency/info", &query).await.unwrap();

        assert_eq!(data, vec![1, 2, 3]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_call_returns_raw_payload() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/global-metrics/quotes/latest")
            .with_status(200)
            .with_body(OK_BODY)
            .create_async()
            .await;

        let client = test_client(&server.url(), Duration::from_secs(5));
        let raw = client
            .call("global-metrics/quotes/latest", &Query::new())
            .await
            .unwrap();
        assert_eq!(raw.get(), "[1, 2, 3]");
    }

    #[tokio::test]
    async fn test_rate_limited_is_vendor_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/cryptocurrency/map")
            .with_status(429)
            .with_body(r#"{"status": {"timestamp": "2024-01-15T12:30:00.000Z", "error_code": 1008, "error_message": "You've exceeded your API Key's HTTP request rate limit. Rate limits reset every minute.", "elapsed": 0, "credit_count": 0}}"#)
            .create_async()
            .await;

        let client = test_client(&server.url(), Duration::from_secs(5));
        let err = client
            .call("cryptocurrency/map", &Query::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Vendor);
        assert_eq!(err.vendor_code(), Some(1008));
        assert!(err.to_string().starts_with("You've exceeded"));
    }

    #[tokio::test]
    async fn test_unauthorized_is_vendor_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/cryptocurrency/map")
            .with_status(401)
            .with_body(r#"{"status": {"error_code": 1001, "error_message": "This API Key is invalid."}}"#)
            .create_async()
            .await;

        let client = test_client(&server.url(), Duration::from_secs(5));
        let err = client
            .call("cryptocurrency/map", &Query::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Vendor);
        assert_eq!(err.to_string(), "This API Key is invalid.");
    }

    #[tokio::test]
    async fn test_server_error_is_transport_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/cryptocurrency/map")
            .with_status(500)
            .with_body(r#"{"status": {"error_code": 0}, "data": []}"#)
            .create_async()
            .await;

        let client = test_client(&server.url(), Duration::from_secs(5));
        let err = client
            .call("cryptocurrency/map", &Query::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.to_string(), "500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_not_found_is_transport_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/nowhere")
            .with_status(404)
            .with_body("not json at all")
            .create_async()
            .await;

        let client = test_client(&server.url(), Duration::from_secs(5));
        let err = client.call("nowhere", &Query::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status } if status == StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/cryptocurrency/map")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = test_client(&server.url(), Duration::from_secs(5));
        let err = client
            .call("cryptocurrency/map", &Query::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_payload_type_mismatch_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/cryptocurrency/map")
            .with_status(200)
            .with_body(OK_BODY)
            .create_async()
            .await;

        let client = test_client(&server.url(), Duration::from_secs(5));
        let err = client
            .get::<Vec<String>>("cryptocurrency/map", &Query::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let addr = delayed_server(Duration::from_secs(2), OK_BODY).await;
        let client = test_client(&format!("http://{addr}"), Duration::from_millis(100));

        let started = std::time::Instant::now();
        let err = client
            .call("cryptocurrency/map", &Query::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_response_within_timeout_succeeds() {
        let addr = delayed_server(Duration::from_millis(50), OK_BODY).await;
        let client = test_client(&format!("http://{addr}"), Duration::from_secs(5));

        let data: Vec<u32> = client
            .get("cryptocurrency/map", &Query::new())
            .await
            .unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_invalid_api_key_is_transport_error() {
        let config = ClientConfig::new("bad\nkey").with_domain("http://127.0.0.1:9");
        let client = CmcClient::new(config).unwrap();
        let err = client
            .call("cryptocurrency/map", &Query::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = test_client(&format!("http://{addr}"), Duration::from_secs(5));
        let err = client
            .call("cryptocurrency/map", &Query::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }
}
