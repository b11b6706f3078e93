//! Request/response values and the transport trait.

use std::borrow::Cow;
use std::fmt;

use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::Serialize;

use super::TransportError;

/// HTTP methods used by the Payop API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read-only lookups (payment methods, transactions).
    Get,
    /// Creation requests carrying a JSON body (invoices, refunds).
    Post,
}

impl Method {
    /// Returns the equivalent `http` crate method.
    #[must_use]
    pub const fn as_http(self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Post => http::Method::POST,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// A single request to the Payop API.
///
/// Built once per operation and handed to a [`Transport`]. The body, when
/// present, is already encoded JSON.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Request method
    pub method: Method,
    /// Absolute endpoint URL
    pub url: url::Url,
    /// Headers to send
    pub headers: http::HeaderMap,
    /// Encoded JSON body
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(Method::Get, url)
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(Method::Post, url)
    }

    /// Sets the `Authorization` header.
    ///
    /// The value is marked sensitive so it is never printed by `Debug`.
    #[must_use]
    pub fn with_authorization(mut self, mut value: HeaderValue) -> Self {
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        self
    }

    /// Encodes `body` as JSON and sets the matching `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `body` cannot be represented as JSON.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_vec(body)?);
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(self)
    }
}

/// A fully buffered response from the provider.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Raw response body
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true only for HTTP 200, the provider's single success status.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == http::StatusCode::OK
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Sends [`ApiRequest`]s and returns the provider's raw answer.
///
/// The client depends only on this trait, so tests inject a recording
/// mock and applications may wrap the production transport.
///
/// # Example
///
/// ```ignore
/// use payop::transport::{ApiRequest, ApiResponse, Transport, TransportError};
///
/// struct Canned(ApiResponse);
///
/// impl Transport for Canned {
///     async fn send(&self, _req: ApiRequest) -> Result<ApiResponse, TransportError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Performs exactly one HTTP exchange.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response could be obtained.
    /// Non-200 responses are returned as `Ok` for the caller to classify.
    fn send(
        &self,
        req: ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, TransportError>> + Send;
}
