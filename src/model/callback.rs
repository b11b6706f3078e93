//! Payment notification (IPN) records.
//!
//! Built by [`crate::callback::parse_callback`]; never constructed from
//! unvalidated input directly.

use serde::Serialize;

use super::TransactionStatus;

/// Invoice part of a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackInvoice {
    pub id: String,
    pub txid: String,
    /// Merchant metadata echoed back; `None` when absent or null
    pub metadata: Option<serde_json::Value>,
}

/// Order reference inside a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackOrder {
    pub id: String,
}

/// Provider error attached to a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackError {
    pub message: String,
    pub code: String,
}

/// Transaction part of a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackTransaction {
    pub id: String,
    /// Raw state code
    pub state: u8,
    pub order: CallbackOrder,
    pub error: Option<CallbackError>,
}

impl CallbackTransaction {
    /// Logical state, or `None` for an undocumented code.
    #[must_use]
    pub const fn status(&self) -> Option<TransactionStatus> {
        TransactionStatus::classify(self.state)
    }
}

/// A validated payment notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackResponse {
    pub invoice: CallbackInvoice,
    pub transaction: CallbackTransaction,
}
