//! Response envelope handling.
//!
//! Every API response is wrapped as `{"data": ..., "status": {...}}`. The
//! status block says whether the call succeeded; `data` holds the endpoint's
//! payload and is passed on unparsed.

use cmcpro_types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};

/// The outer wrapper of every API response.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    /// Endpoint payload, kept as the exact bytes received.
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
    /// Call-level status and accounting.
    #[serde(default)]
    pub status: ResponseStatus,
}

/// The `status` block of a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseStatus {
    /// Server time of the response.
    pub timestamp: Timestamp,
    /// 0 on success.
    pub error_code: i64,
    /// Human-readable reason when `error_code` is non-zero.
    pub error_message: Option<String>,
    /// Server-side processing time in milliseconds.
    pub elapsed: i64,
    /// API credits charged for the call.
    pub credit_count: i64,
    /// Deprecation or plan notices.
    pub notice: Option<String>,
}

impl ResponseStatus {
    /// Returns true when the API reported success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error_code == 0
    }

    /// Returns the error message, or an empty string.
    #[must_use]
    pub fn error_message(&self) -> &str {
        self.error_message.as_deref().unwrap_or_default()
    }
}

impl Envelope {
    /// Checks the status and returns the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Vendor`] if `error_code` is non-zero, whatever
    /// `data` holds, and [`ApiError::Decode`] if a successful response has
    /// no `data`.
    pub fn into_data(self) -> ApiResult<Box<RawValue>> {
        let status = self.status;
        debug!(
            error_code = status.error_code,
            elapsed_ms = status.elapsed,
            credit_count = status.credit_count,
            "response status"
        );

        if !status.is_success() {
            warn!(
                error_code = status.error_code,
                error_message = status.error_message(),
                "API reported an error"
            );
            return Err(ApiError::Vendor(status));
        }

        self.data.ok_or_else(|| {
            ApiError::Decode(<serde_json::Error as serde::de::Error>::missing_field("data"))
        })
    }
}

/// Parses a response body and returns its `data` payload.
///
/// The returned payload is byte-identical to the `data` value in `body`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] for malformed envelopes and
/// [`ApiError::Vendor`] when the API reports an error.
pub fn unwrap_envelope(body: &[u8]) -> ApiResult<Box<RawValue>> {
    let envelope: Envelope = serde_json::from_slice(body)?;
    envelope.into_data()
}
