//! Payop: typed client for the Payop payment API.
//!
//! A library for creating signed invoices, fetching and refunding
//! transactions, and validating asynchronous payment notifications.

pub mod callback;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod signature;
pub mod transport;

pub use client::{Payop, PayopConfig};
pub use error::{ApiError, PayopError, ValidationError};
