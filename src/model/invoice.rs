//! Checkout inputs and the invoice creation result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Checkout page language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Russian
    Ru,
}

impl Language {
    /// Returns the locale code used on the wire and in checkout URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unsupported locale code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language '{0}': expected en or ru")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// The merchant's order being paid for.
///
/// `id`, `amount` and `currency` are the fields covered by the signature.
/// `amount` stays textual so the signed value is exactly what is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Merchant order identifier
    pub id: String,
    /// Decimal amount, e.g. `"10.00"`
    pub amount: String,
    /// ISO 4217 currency code
    pub currency: String,
    /// Free-form description shown to the payer
    pub description: String,
    /// Line items, passed through untouched; sent as `[]` when absent
    #[serde(default, serialize_with = "items_or_empty")]
    pub items: Option<Vec<serde_json::Value>>,
}

fn items_or_empty<S: Serializer>(
    items: &Option<Vec<serde_json::Value>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    items.as_deref().unwrap_or_default().serialize(serializer)
}

impl Order {
    /// Creates an order without line items.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        amount: impl Into<String>,
        currency: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount: amount.into(),
            currency: currency.into(),
            description: description.into(),
            items: None,
        }
    }

    /// Sets the line items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<serde_json::Value>) -> Self {
        self.items = Some(items);
        self
    }
}

/// The person paying the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    /// Payer email (required by the provider)
    pub email: String,
    /// Payer name
    #[serde(default)]
    pub name: Option<String>,
    /// Payer phone number
    #[serde(default)]
    pub phone: Option<String>,
}

impl Payer {
    /// Creates a payer with only an email.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            phone: None,
        }
    }

    /// Sets the payer name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the payer phone.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// A request to the provider to create a payable transaction.
///
/// Created per checkout attempt. The client only borrows it, so the value
/// that was signed is the value that was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Order being paid
    pub order: Order,
    /// Payer details
    pub payer: Payer,
    /// Redirect target after a successful payment
    pub result_url: String,
    /// Redirect target after a failed payment
    pub fail_path: String,
    /// Provider payment method identifier
    pub payment_method: String,
    /// Checkout page language
    #[serde(default)]
    pub language: Language,
    /// Arbitrary merchant data echoed back in callbacks
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Invoice {
    /// Creates an invoice in the default language without metadata.
    #[must_use]
    pub fn new(
        order: Order,
        payer: Payer,
        result_url: impl Into<String>,
        fail_path: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            order,
            payer,
            result_url: result_url.into(),
            fail_path: fail_path.into(),
            payment_method: payment_method.into(),
            language: Language::default(),
            metadata: None,
        }
    }

    /// Sets the checkout language.
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Sets the merchant metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Map<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Result of invoice creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceResponse {
    /// Provider-assigned invoice token, embedded in the checkout URL
    pub data: String,
    /// Provider status code
    pub status: i64,
}
