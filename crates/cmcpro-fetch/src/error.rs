//! Error types for API calls.

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::envelope::ResponseStatus;

/// Result type alias for API calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors that can occur during an API call.
///
/// Every error is terminal for the call that produced it; nothing is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The local timer fired before the response arrived.
    #[error("Request exceeded the time limit of {timeout:?}")]
    Timeout {
        /// The configured timeout.
        timeout: Duration,
    },

    /// Network failure or request construction error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request could not be built from the configuration.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The server answered with a status that carries no envelope.
    ///
    /// Displays as the HTTP status line, e.g. `500 Internal Server Error`.
    #[error("{status}")]
    Status {
        /// HTTP status code.
        status: StatusCode,
    },

    /// The envelope or payload did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API reported a non-zero `error_code`.
    ///
    /// Displays as the vendor's `error_message` verbatim.
    #[error("{}", .0.error_message())]
    Vendor(ResponseStatus),
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The call timed out locally.
    Timeout,
    /// The request never produced an envelope.
    Transport,
    /// The response body could not be decoded.
    Decode,
    /// The API rejected the call.
    Vendor,
}

impl ApiError {
    /// Returns the error's kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Http(_) | Self::InvalidRequest(_) | Self::Status { .. } => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Vendor(_) => ErrorKind::Vendor,
        }
    }

    /// Returns the response status block for vendor errors.
    #[must_use]
    pub const fn vendor_status(&self) -> Option<&ResponseStatus> {
        match self {
            Self::Vendor(status) => Some(status),
            _ => None,
        }
    }

    /// Returns the vendor's error code for vendor errors.
    #[must_use]
    pub const fn vendor_code(&self) -> Option<i64> {
        match self {
            Self::Vendor(status) => Some(status.error_code),
            _ => None,
        }
    }
}
