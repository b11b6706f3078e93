//! Refund requests and results.

use serde::{Serialize, Serializer};

use crate::error::ValidationError;

/// How much of a transaction to refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundType {
    /// The whole transaction amount (wire code 1)
    Full,
    /// Part of the amount, given explicitly (wire code 2)
    Partial,
}

impl RefundType {
    /// Wire code sent as `refundType`.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Full => 1,
            Self::Partial => 2,
        }
    }
}

impl Serialize for RefundType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Body of `POST /v1/refunds/create`.
///
/// A partial refund always carries a non-empty amount and a full refund
/// never does; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundBody {
    transaction_identifier: String,
    refund_type: RefundType,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<String>,
}

impl RefundBody {
    /// Validates and builds a refund request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Refund`] when:
    /// - The transaction identifier is blank
    /// - A partial refund has no amount, or a blank one
    /// - A full refund is given an amount
    pub fn new(
        transaction_identifier: impl Into<String>,
        refund_type: RefundType,
        amount: Option<String>,
    ) -> Result<Self, ValidationError> {
        let transaction_identifier = transaction_identifier.into();
        if transaction_identifier.trim().is_empty() {
            return Err(ValidationError::Refund(
                "transaction identifier must not be empty",
            ));
        }

        match (refund_type, &amount) {
            (RefundType::Partial, None) => {
                return Err(ValidationError::Refund(
                    "a partial refund requires an amount",
                ));
            }
            (RefundType::Partial, Some(value)) if value.trim().is_empty() => {
                return Err(ValidationError::Refund(
                    "a partial refund amount must not be empty",
                ));
            }
            (RefundType::Full, Some(_)) => {
                return Err(ValidationError::Refund(
                    "a full refund does not take an amount",
                ));
            }
            _ => {}
        }

        Ok(Self {
            transaction_identifier,
            refund_type,
            amount,
        })
    }

    /// Builds a full refund request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Refund`] if the identifier is blank.
    pub fn full(transaction_identifier: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(transaction_identifier, RefundType::Full, None)
    }

    /// Builds a partial refund request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Refund`] if the identifier or amount is blank.
    pub fn partial(
        transaction_identifier: impl Into<String>,
        amount: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            transaction_identifier,
            RefundType::Partial,
            Some(amount.into()),
        )
    }

    /// Transaction being refunded.
    #[must_use]
    pub fn transaction_identifier(&self) -> &str {
        &self.transaction_identifier
    }

    /// Full or partial.
    #[must_use]
    pub const fn refund_type(&self) -> RefundType {
        self.refund_type
    }

    /// Amount for partial refunds.
    #[must_use]
    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }
}

/// Result of a refund request.
///
/// Both fields are optional: the provider's refund answer is mapped
/// leniently and missing or ill-typed fields become `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefundResponse {
    /// Provider status code
    pub status: Option<i64>,
    /// Provider payload
    pub data: Option<serde_json::Value>,
}

impl RefundResponse {
    /// Maps a decoded response body.
    #[must_use]
    pub fn from_body(body: &serde_json::Value) -> Self {
        Self {
            status: body.get("status").and_then(serde_json::Value::as_i64),
            data: body.get("data").filter(|v| !v.is_null()).cloned(),
        }
    }
}
