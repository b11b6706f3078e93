//! HTTP seam between the Payop client and the network.
//!
//! This module provides:
//! - The explicit request method ([`Method`])
//! - Request and response values ([`ApiRequest`], [`ApiResponse`])
//! - The injectable transport abstraction ([`Transport`])
//! - The production implementation backed by reqwest ([`ReqwestTransport`])

mod client;
mod error;
mod request;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestTransport;
pub use error::TransportError;
pub use request::{ApiRequest, ApiResponse, Method, Transport};
