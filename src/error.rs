//! Error types surfaced by the Payop client.

use thiserror::Error;

use crate::transport::TransportError;

/// Top-level error for every client operation.
///
/// Nothing in the library recovers from these locally; each failure is
/// returned to the caller as-is.
#[derive(Debug, Error)]
pub enum PayopError {
    /// The provider answered, but not with a usable success response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Input failed validation (callback payloads, refund requests).
    #[error("Payop validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No response could be obtained from the provider.
    #[error("Payop transport error: {0}")]
    Transport(#[from] TransportError),

    /// The operation signs its request but no secret key was configured.
    #[error("A secret key is required to sign Payop requests")]
    MissingSecretKey,

    /// The access token cannot be sent as an HTTP header value.
    #[error("Access token contains characters not allowed in an HTTP header")]
    InvalidToken,

    /// The configured base API URL is unusable.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Reason for rejection
        reason: String,
    },

    /// A request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

/// The provider returned a response the client cannot accept.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Any status other than HTTP 200.
    #[error("Payop error: {body}. Error code: {}", status.as_u16())]
    Status {
        /// Status code returned by the provider
        status: http::StatusCode,
        /// Raw response body
        body: String,
    },

    /// An HTTP 200 whose body does not map onto the expected record.
    #[error("Unexpected Payop response ({}): {reason}", status.as_u16())]
    Malformed {
        /// Status code returned by the provider
        status: http::StatusCode,
        /// Raw response body
        body: String,
        /// What failed to map
        reason: String,
    },
}

impl ApiError {
    /// Status code of the offending response.
    #[must_use]
    pub const fn status(&self) -> http::StatusCode {
        match self {
            Self::Status { status, .. } | Self::Malformed { status, .. } => *status,
        }
    }

    /// Raw body of the offending response.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Status { body, .. } | Self::Malformed { body, .. } => body,
        }
    }
}

/// Malformed input rejected before or instead of talking to the provider.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required key is absent.
    #[error("Missing required key '{path}'")]
    Missing {
        /// Dotted path of the key, e.g. `transaction.order.id`
        path: String,
    },

    /// A key is present with the wrong JSON shape.
    #[error("Key '{path}' has the wrong type: expected {expected}")]
    WrongType {
        /// Dotted path of the key
        path: String,
        /// Description of the accepted shape
        expected: &'static str,
    },

    /// Callback text is not JSON at all.
    #[error("Callback payload is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// A refund request violates its construction rules.
    #[error("Invalid refund request: {0}")]
    Refund(&'static str),
}
