//! Validation of inbound payment notifications.
//!
//! The provider posts a JSON notification whenever a transaction changes
//! state. This module checks its shape and maps it into
//! [`CallbackResponse`]. Authenticity is a separate step: recompute the
//! order signature with [`crate::signature`] or
//! [`Payop::verify_order_signature`](crate::Payop::verify_order_signature).

use serde_json::Value;

use crate::error::ValidationError;
use crate::model::{
    CallbackError, CallbackInvoice, CallbackOrder, CallbackResponse, CallbackTransaction,
};

#[cfg(test)]
#[path = "callback_tests.rs"]
mod tests;

/// Validates an already-decoded notification payload.
///
/// # Errors
///
/// Returns [`ValidationError::Missing`] or [`ValidationError::WrongType`]
/// naming the dotted path of the first offending key.
pub fn parse_callback(payload: &Value) -> Result<CallbackResponse, ValidationError> {
    map_payload(Node::root(payload)).inspect_err(log_failure)
}

/// Decodes and validates a notification body.
///
/// # Errors
///
/// Returns [`ValidationError::Json`] for text that is not JSON, otherwise
/// the same errors as [`parse_callback`].
pub fn parse_callback_str(raw: &str) -> Result<CallbackResponse, ValidationError> {
    let payload: Value = serde_json::from_str(raw)
        .map_err(ValidationError::Json)
        .inspect_err(log_failure)?;
    parse_callback(&payload)
}

fn log_failure(error: &ValidationError) {
    tracing::error!("Error during Payop callback data parsing: {error}");
}

fn map_payload(root: Node<'_>) -> Result<CallbackResponse, ValidationError> {
    let invoice = root.child("invoice")?;
    let invoice = CallbackInvoice {
        id: invoice.child("id")?.string()?,
        txid: invoice.child("txid")?.string()?,
        metadata: invoice.optional_child("metadata")?.map(|m| m.value.clone()),
    };

    let transaction = root.child("transaction")?;
    let transaction = CallbackTransaction {
        id: transaction.child("id")?.string()?,
        state: transaction.child("state")?.state_code()?,
        order: CallbackOrder {
            id: transaction.child("order")?.child("id")?.string()?,
        },
        error: transaction
            .optional_child("error")?
            .map(|error| map_error(&error))
            .transpose()?,
    };

    Ok(CallbackResponse {
        invoice,
        transaction,
    })
}

// Message and code travel together: an error object needs both.
fn map_error(error: &Node<'_>) -> Result<CallbackError, ValidationError> {
    Ok(CallbackError {
        message: error.child("message")?.string()?,
        code: error.child("code")?.string()?,
    })
}

/// A JSON value together with the dotted path that led to it.
struct Node<'a> {
    path: String,
    value: &'a Value,
}

impl<'a> Node<'a> {
    const fn root(value: &'a Value) -> Self {
        Self {
            path: String::new(),
            value,
        }
    }

    fn display_path(&self) -> String {
        if self.path.is_empty() {
            "payload".to_string()
        } else {
            self.path.clone()
        }
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn wrong_type(&self, expected: &'static str) -> ValidationError {
        ValidationError::WrongType {
            path: self.display_path(),
            expected,
        }
    }

    /// Looks up `key`; absent and `null` are both `None`.
    fn lookup(&self, key: &str) -> Result<Option<Self>, ValidationError> {
        let object = self.value.as_object().ok_or_else(|| self.wrong_type("object"))?;

        Ok(object
            .get(key)
            .filter(|value| !value.is_null())
            .map(|value| Self {
                path: self.child_path(key),
                value,
            }))
    }

    fn child(&self, key: &str) -> Result<Self, ValidationError> {
        self.lookup(key)?.ok_or_else(|| ValidationError::Missing {
            path: self.child_path(key),
        })
    }

    fn optional_child(&self, key: &str) -> Result<Option<Self>, ValidationError> {
        self.lookup(key)
    }

    fn string(&self) -> Result<String, ValidationError> {
        self.value
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| self.wrong_type("string"))
    }

    fn state_code(&self) -> Result<u8, ValidationError> {
        self.value
            .as_u64()
            .and_then(|code| u8::try_from(code).ok())
            .ok_or_else(|| self.wrong_type("integer state code"))
    }
}
