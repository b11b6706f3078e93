//! Provider-side transaction records and state classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Logical transaction state.
///
/// The provider reports failures with two raw codes (3 and 5), so states
/// are derived from codes with [`TransactionStatus::classify`] rather than
/// by a one-to-one numeric mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    /// Created, awaiting payment (code 1)
    New,
    /// Paid (code 2)
    Accepted,
    /// Awaiting confirmation (code 4)
    Pending,
    /// Rejected or errored (codes 3 and 5)
    Failed,
}

impl TransactionStatus {
    /// Maps a raw provider state code to its logical state.
    ///
    /// Returns `None` for codes the provider has not documented.
    #[must_use]
    pub const fn classify(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::New),
            2 => Some(Self::Accepted),
            3 | 5 => Some(Self::Failed),
            4 => Some(Self::Pending),
            _ => None,
        }
    }

    /// Canonical raw code for this state (3 for [`TransactionStatus::Failed`]).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::New => 1,
            Self::Accepted => 2,
            Self::Failed => 3,
            Self::Pending => 4,
        }
    }

    /// Returns true once the provider will not move the transaction again.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Accepted | Self::Failed)
    }
}

/// A transaction as reported by `GET /v1/transactions/{id}`.
///
/// Amounts accept JSON numbers or numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Provider transaction identifier
    pub identifier: String,
    /// Merchant wallet the funds settle into
    #[serde(default)]
    pub wallet_identifier: Option<String>,
    /// Invoice amount
    pub amount: Decimal,
    /// Invoice currency
    pub currency: String,
    /// Amount actually charged to the payer
    #[serde(default)]
    pub pay_amount: Option<Decimal>,
    /// Currency actually charged to the payer
    #[serde(default)]
    pub pay_currency: Option<String>,
    /// Raw state code; see [`Transaction::status`]
    pub state: u8,
    /// Merchant order identifier
    #[serde(default)]
    pub order_identifier: Option<String>,
    /// Payment method identifier used by the payer
    #[serde(default)]
    pub payment_method_identifier: Option<String>,
    /// Provider error description for failed transactions
    #[serde(default)]
    pub error_message: Option<String>,
    /// Unix timestamp of creation
    pub created_at: i64,
    /// Unix timestamp of the last state change
    #[serde(default)]
    pub updated_at: Option<i64>,
    /// Refund issued against this transaction
    #[serde(default)]
    pub refund: Option<TransactionRefund>,
    /// Chargeback raised against this transaction
    #[serde(default)]
    pub chargeback: Option<Chargeback>,
    /// Payer location details
    #[serde(default)]
    pub geo_information: Option<GeoInformation>,
    /// Card details for card payments
    #[serde(default)]
    pub card_info: Option<CardInfo>,
    /// Fees charged by the provider
    #[serde(default, deserialize_with = "null_as_empty")]
    pub commission: Vec<Commission>,
    /// Currency conversions applied
    #[serde(default, deserialize_with = "null_as_empty")]
    pub exchange: Vec<Exchange>,
}

impl Transaction {
    /// Logical state, or `None` for an undocumented code.
    #[must_use]
    pub const fn status(&self) -> Option<TransactionStatus> {
        TransactionStatus::classify(self.state)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Refund attached to a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRefund {
    /// Refund identifier
    pub identifier: String,
    /// Refunded amount
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Refund currency
    #[serde(default)]
    pub currency: Option<String>,
    /// Raw refund state code
    #[serde(default)]
    pub state: Option<u8>,
    /// Unix timestamp of creation
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Chargeback attached to a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chargeback {
    /// Chargeback identifier
    #[serde(default)]
    pub identifier: Option<String>,
    /// Disputed amount
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Dispute currency
    #[serde(default)]
    pub currency: Option<String>,
    /// Reason given by the issuer
    #[serde(default)]
    pub reason: Option<String>,
    /// Unix timestamp of creation
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Where the payer was when paying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoInformation {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Non-sensitive card metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// Bank identification number (first digits)
    #[serde(default)]
    pub bin: Option<String>,
    /// Last four digits
    #[serde(default)]
    pub last_digits: Option<String>,
    /// Card scheme, e.g. `VISA`
    #[serde(default)]
    pub brand: Option<String>,
    /// Issuing bank
    #[serde(default)]
    pub bank: Option<String>,
    /// Issuing country
    #[serde(default)]
    pub country: Option<String>,
    /// Cardholder name
    #[serde(default)]
    pub holder_name: Option<String>,
}

/// One provider fee line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    #[serde(default)]
    pub percent: Option<Decimal>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// One currency conversion line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    #[serde(default)]
    pub rate: Option<Decimal>,
    #[serde(default)]
    pub from_currency: Option<String>,
    #[serde(default)]
    pub to_currency: Option<String>,
}
