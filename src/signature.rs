//! Order signatures shared with the provider.
//!
//! Payop binds an order's id, amount and currency to the merchant secret
//! with a SHA-256 digest. The same digest authenticates invoice creation
//! and can be recomputed to check a received signature.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;

/// Computes the lowercase hex SHA-256 of `"{amount}:{currency}:{order_id}:{secret}"`.
///
/// # Example
///
/// ```
/// let sig = payop::signature::sign("order-1", "10.00", "EUR", "secret");
/// assert_eq!(sig.len(), 64);
/// assert_eq!(sig, payop::signature::sign("order-1", "10.00", "EUR", "secret"));
/// ```
#[must_use]
pub fn sign(order_id: &str, amount: &str, currency: &str, secret: &str) -> String {
    let digest = Sha256::digest(format!("{amount}:{currency}:{order_id}:{secret}").as_bytes());
    hex::encode(digest)
}

/// Compares two signatures in constant time.
///
/// Inputs of different length are unequal.
#[must_use]
pub fn verify(expected: &str, received: &str) -> bool {
    expected.as_bytes().ct_eq(received.as_bytes()).into()
}
