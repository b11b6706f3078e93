//! Payop API client.
//!
//! This module provides:
//! - Credentials and endpoint settings ([`PayopConfig`])
//! - The client and its operations ([`Payop`])
//! - Hosted checkout URL formatting ([`checkout_url`])

mod api;
mod settings;

#[cfg(test)]
mod settings_tests;

pub use api::Payop;
pub use settings::{CHECKOUT_HOST, DEFAULT_API_URL, PayopConfig, checkout_url};
