//! Network-level failures.

use thiserror::Error;

/// Failure to complete an HTTP exchange with the provider.
///
/// Raised before any response status is known. A response that arrived
/// with a non-200 status is an [`ApiError`](crate::ApiError) instead.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed or the response body could not be read.
    ///
    /// This includes DNS resolution failures and refused connections.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The underlying client gave up waiting for the provider.
    #[error("Request timed out")]
    Timeout,

    /// The HTTP library rejected the request before sending it.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
