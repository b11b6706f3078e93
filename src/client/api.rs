//! The Payop client and its operations.

use http::header::HeaderValue;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::Instrument;
use url::Url;

use super::settings::{PayopConfig, checkout_url};
use crate::callback;
use crate::error::{ApiError, PayopError};
use crate::model::{
    CallbackResponse, Invoice, InvoiceResponse, Order, RefundBody, RefundResponse, Transaction,
};
use crate::signature;
use crate::transport::{ApiRequest, ApiResponse, Method, ReqwestTransport, Transport};

const CREATE_INVOICE: &[&str] = &["v1", "invoices", "create"];
const AVAILABLE_METHODS: &[&str] = &[
    "v1",
    "instrument-settings",
    "payment-methods",
    "available-for-user",
];
const TRANSACTIONS: &str = "transactions";
const CREATE_REFUND: &[&str] = &["v1", "refunds", "create"];

/// Invoice body as sent: the invoice plus the caller's public key and
/// the order signature.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SignedInvoice<'a> {
    #[serde(flatten)]
    invoice: &'a Invoice,
    public_key: &'a str,
    signature: String,
}

/// `{"data": ...}` success envelope.
#[derive(Deserialize)]
struct DataEnvelope<D> {
    data: D,
}

/// Client for the Payop API.
///
/// Each operation performs exactly one HTTP exchange through the
/// [`Transport`]; nothing is retried and nothing is spawned. The client
/// holds no mutable state, so one instance can be shared across tasks.
///
/// # Type Parameters
///
/// - `T`: The transport (defaults to [`ReqwestTransport`])
///
/// # Example
///
/// ```no_run
/// use payop::model::{Invoice, Order, Payer};
/// use payop::{Payop, PayopConfig};
///
/// # async fn example() -> Result<(), payop::PayopError> {
/// let client = Payop::new(
///     PayopConfig::new("jwt-token", "public-key").with_secret_key("secret"),
/// )?;
/// let invoice = Invoice::new(
///     Order::new("order-1", "10.00", "EUR", "Subscription"),
///     Payer::new("payer@example.com"),
///     "https://shop.example.com/success",
///     "https://shop.example.com/fail",
///     "381",
/// );
/// let url = client.checkout(&invoice).await?;
/// println!("Redirect to {url}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Payop<T = ReqwestTransport> {
    transport: T,
    config: PayopConfig,
    base_url: Url,
    authorization: HeaderValue,
}

impl Payop<ReqwestTransport> {
    /// Creates a client using a default [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// See [`Payop::with_transport`].
    pub fn new(config: PayopConfig) -> Result<Self, PayopError> {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T> Payop<T> {
    /// Creates a client sending through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API URL does not parse or cannot carry a path ([`PayopError::InvalidUrl`])
    /// - The token is not a valid header value ([`PayopError::InvalidToken`])
    pub fn with_transport(config: PayopConfig, transport: T) -> Result<Self, PayopError> {
        let invalid_url = |reason: String| PayopError::InvalidUrl {
            url: config.api_url().to_string(),
            reason,
        };

        let base_url = Url::parse(config.api_url()).map_err(|e| invalid_url(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid_url("URL cannot be used as a base".to_string()));
        }

        let authorization = HeaderValue::from_str(&format!("Bearer {}", config.token()))
            .map_err(|_| PayopError::InvalidToken)?;

        Ok(Self {
            transport,
            config,
            base_url,
            authorization,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &PayopConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Computes the signature Payop expects for `order`.
    ///
    /// # Errors
    ///
    /// Returns [`PayopError::MissingSecretKey`] if no secret key is configured.
    pub fn order_signature(&self, order: &Order) -> Result<String, PayopError> {
        let secret = self
            .config
            .secret_key()
            .ok_or(PayopError::MissingSecretKey)?;
        Ok(signature::sign(
            &order.id,
            &order.amount,
            &order.currency,
            secret,
        ))
    }

    /// Checks a received signature against the order fields it claims to cover.
    ///
    /// This is never done implicitly by [`Payop::parse_callback_data`].
    ///
    /// # Errors
    ///
    /// Returns [`PayopError::MissingSecretKey`] if no secret key is configured.
    pub fn verify_order_signature(
        &self,
        order_id: &str,
        amount: &str,
        currency: &str,
        received: &str,
    ) -> Result<bool, PayopError> {
        let secret = self
            .config
            .secret_key()
            .ok_or(PayopError::MissingSecretKey)?;
        let expected = signature::sign(order_id, amount, currency, secret);
        Ok(signature::verify(&expected, received))
    }

    /// Validates a notification payload.
    ///
    /// # Errors
    ///
    /// Returns [`PayopError::Validation`] describing the first offending key.
    pub fn parse_callback_data(
        &self,
        payload: &serde_json::Value,
    ) -> Result<CallbackResponse, PayopError> {
        Ok(callback::parse_callback(payload)?)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base URLs are rejected in with_transport
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> ApiRequest {
        ApiRequest::new(method, self.endpoint(segments))
            .with_authorization(self.authorization.clone())
    }

    fn span(&self, operation: &'static str) -> tracing::Span {
        let parent = self
            .config
            .span()
            .cloned()
            .unwrap_or_else(tracing::Span::current);
        tracing::info_span!(parent: &parent, "payop", operation)
    }
}

impl<T: Transport> Payop<T> {
    /// Creates an invoice.
    ///
    /// The order is signed with the secret key, the public key is attached
    /// and a missing item list is sent as `[]`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No secret key is configured ([`PayopError::MissingSecretKey`])
    /// - No response arrives ([`PayopError::Transport`])
    /// - The status is not 200 or the body lacks `data`/`status` ([`PayopError::Api`])
    pub async fn create_invoice(&self, invoice: &Invoice) -> Result<InvoiceResponse, PayopError> {
        self.submit_invoice(invoice)
            .instrument(self.span("create_invoice"))
            .await
    }

    /// Creates an invoice and returns the hosted checkout page URL.
    ///
    /// The page locale follows the invoice language.
    ///
    /// # Errors
    ///
    /// Same as [`Payop::create_invoice`].
    pub async fn checkout(&self, invoice: &Invoice) -> Result<String, PayopError> {
        let created = self.create_invoice(invoice).await?;
        let url = checkout_url(invoice.language, &created.data);
        tracing::info!(%url, "Checkout page ready");
        Ok(url)
    }

    /// Lists the payment methods available to the application.
    ///
    /// The `data` field is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PayopError::Transport`] or [`PayopError::Api`].
    pub async fn available_methods(&self) -> Result<serde_json::Value, PayopError> {
        self.fetch_methods()
            .instrument(self.span("available_methods"))
            .await
    }

    /// Fetches a transaction by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PayopError::Transport`], or [`PayopError::Api`] for a
    /// non-200 status or a record missing required fields.
    pub async fn transaction(&self, id: &str) -> Result<Transaction, PayopError> {
        self.fetch_transaction(id)
            .instrument(self.span("transaction"))
            .await
    }

    /// Requests a refund.
    ///
    /// # Errors
    ///
    /// Returns [`PayopError::Transport`], or [`PayopError::Api`] for a
    /// non-200 status or a body that is not JSON. Missing fields in a JSON
    /// body are not errors.
    pub async fn refund(&self, body: &RefundBody) -> Result<RefundResponse, PayopError> {
        self.submit_refund(body).instrument(self.span("refund")).await
    }

    async fn submit_invoice(&self, invoice: &Invoice) -> Result<InvoiceResponse, PayopError> {
        let payload = SignedInvoice {
            invoice,
            public_key: self.config.public_key(),
            signature: self.order_signature(&invoice.order)?,
        };
        let request = self
            .request(Method::Post, CREATE_INVOICE)
            .with_json(&payload)
            .map_err(PayopError::Encode)?;

        let response = self.execute(request).await?;
        let created: InvoiceResponse = decode(&response)?;

        tracing::info!(
            order_id = %invoice.order.id,
            invoice_id = %created.data,
            status = created.status,
            "Invoice created"
        );
        Ok(created)
    }

    async fn fetch_methods(&self) -> Result<serde_json::Value, PayopError> {
        let response = self
            .execute(self.request(Method::Get, AVAILABLE_METHODS))
            .await?;
        let envelope: DataEnvelope<serde_json::Value> = decode(&response)?;
        Ok(envelope.data)
    }

    async fn fetch_transaction(&self, id: &str) -> Result<Transaction, PayopError> {
        let response = self
            .execute(self.request(Method::Get, &["v1", TRANSACTIONS, id]))
            .await?;
        let envelope: DataEnvelope<Transaction> = decode(&response)?;

        tracing::info!(
            transaction_id = %envelope.data.identifier,
            state = envelope.data.state,
            "Transaction fetched"
        );
        Ok(envelope.data)
    }

    async fn submit_refund(&self, body: &RefundBody) -> Result<RefundResponse, PayopError> {
        let request = self
            .request(Method::Post, CREATE_REFUND)
            .with_json(body)
            .map_err(PayopError::Encode)?;

        let response = self.execute(request).await?;
        let decoded: serde_json::Value = decode(&response)?;
        let refund = RefundResponse::from_body(&decoded);

        tracing::info!(
            transaction_id = %body.transaction_identifier(),
            status = ?refund.status,
            "Refund requested"
        );
        Ok(refund)
    }

    /// Sends one request and rejects any status other than 200.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, PayopError> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending Payop request");

        let response = self.transport.send(request).await?;
        tracing::debug!(
            status = response.status.as_u16(),
            body = %response.body_text(),
            "Payop response"
        );

        if !response.is_ok() {
            tracing::warn!(
                status = response.status.as_u16(),
                "Payop returned an error response"
            );
            return Err(ApiError::Status {
                status: response.status,
                body: response.body_text().into_owned(),
            }
            .into());
        }

        Ok(response)
    }
}

fn decode<D: DeserializeOwned>(response: &ApiResponse) -> Result<D, PayopError> {
    serde_json::from_slice(&response.body).map_err(|e| {
        ApiError::Malformed {
            status: response.status,
            body: response.body_text().into_owned(),
            reason: e.to_string(),
        }
        .into()
    })
}
