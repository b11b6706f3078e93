//! Typed records exchanged with the Payop API.
//!
//! This module provides:
//! - Checkout inputs ([`Order`], [`Payer`], [`Invoice`], [`Language`])
//! - Provider records ([`InvoiceResponse`], [`Transaction`], [`RefundResponse`])
//! - Refund requests ([`RefundBody`], [`RefundType`])
//! - Notification payloads ([`CallbackResponse`] and its parts)
//! - State classification ([`TransactionStatus`])

mod callback;
mod invoice;
mod refund;
mod transaction;

#[cfg(test)]
mod transaction_tests;

pub use callback::{
    CallbackError, CallbackInvoice, CallbackOrder, CallbackResponse, CallbackTransaction,
};
pub use invoice::{Invoice, InvoiceResponse, Language, Order, Payer, UnknownLanguage};
pub use refund::{RefundBody, RefundResponse, RefundType};
pub use transaction::{
    CardInfo, Chargeback, Commission, Exchange, GeoInformation, Transaction, TransactionRefund,
    TransactionStatus,
};
