//! Client credentials and endpoint settings.

use std::fmt;

use crate::model::Language;

/// Default base URL of the Payop API.
pub const DEFAULT_API_URL: &str = "https://payop.com";

/// Host serving the hosted checkout pages.
pub const CHECKOUT_HOST: &str = "https://payop.com";

/// Formats the hosted checkout page URL for an invoice token.
///
/// # Example
///
/// ```
/// use payop::client::checkout_url;
/// use payop::model::Language;
///
/// assert_eq!(
///     checkout_url(Language::En, "abc"),
///     "https://payop.com/en/payment/invoice-preprocessing/abc"
/// );
/// ```
#[must_use]
pub fn checkout_url(language: Language, invoice_id: &str) -> String {
    format!("{CHECKOUT_HOST}/{language}/payment/invoice-preprocessing/{invoice_id}")
}

/// Everything the client needs to talk to Payop.
///
/// Fixed at construction; the client never mutates it.
///
/// # Example
///
/// ```
/// use payop::PayopConfig;
///
/// let config = PayopConfig::new("jwt-token", "application-public-key")
///     .with_secret_key("application-secret");
/// assert_eq!(config.api_url(), "https://payop.com");
/// ```
#[derive(Clone)]
pub struct PayopConfig {
    token: String,
    public_key: String,
    secret_key: Option<String>,
    api_url: String,
    span: Option<tracing::Span>,
}

impl PayopConfig {
    /// Creates a configuration for the default API URL without a secret key.
    #[must_use]
    pub fn new(token: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            public_key: public_key.into(),
            secret_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            span: None,
        }
    }

    /// Sets the secret key used to sign invoices.
    #[must_use]
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Overrides the base API URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the span every operation's span is parented to.
    ///
    /// Without one, operation spans attach to whatever span is current
    /// when the operation runs.
    #[must_use]
    pub fn with_span(mut self, span: tracing::Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Bearer token sent with every call.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Application public key injected into invoices.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Secret key used for signatures, if configured.
    #[must_use]
    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }

    /// Base API URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub(crate) const fn span(&self) -> Option<&tracing::Span> {
        self.span.as_ref()
    }
}

impl fmt::Debug for PayopConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayopConfig")
            .field("token", &"<redacted>")
            .field("public_key", &self.public_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}
