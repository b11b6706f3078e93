//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with global credential options and
//! one subcommand per client operation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::Language;

/// Payop: command-line client for the Payop payment API
///
/// Creates hosted checkouts and works with transactions and payment
/// notifications.
#[derive(Debug, Parser)]
#[command(name = "payop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Bearer token (JWT) for API calls
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Application public key
    #[arg(long = "public-key", global = true)]
    pub public_key: Option<String>,

    /// Application secret key used for signatures
    #[arg(long = "secret-key", global = true)]
    pub secret_key: Option<String>,

    /// Base API URL
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for payop
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file (default: user config directory)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Create an invoice and print the hosted checkout URL
    Checkout(CheckoutArgs),

    /// List payment methods available to the application
    Methods,

    /// Show a transaction
    Transaction {
        /// Transaction identifier
        id: String,
    },

    /// Refund a transaction (full unless --amount is given)
    Refund {
        /// Transaction identifier
        id: String,

        /// Amount for a partial refund
        #[arg(long)]
        amount: Option<String>,
    },

    /// Validate a notification payload stored in a file
    ParseCallback {
        /// Path to the JSON payload ('-' reads stdin)
        file: PathBuf,
    },

    /// Compute or check an order signature
    Sign(SignArgs),
}

/// Arguments for the `checkout` subcommand.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Merchant order identifier
    #[arg(long = "order-id")]
    pub order_id: String,

    /// Order amount, e.g. "10.00"
    #[arg(long)]
    pub amount: String,

    /// ISO currency code
    #[arg(long)]
    pub currency: String,

    /// Order description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Payer email
    #[arg(long)]
    pub email: String,

    /// Payer name
    #[arg(long)]
    pub name: Option<String>,

    /// Payer phone
    #[arg(long)]
    pub phone: Option<String>,

    /// Redirect URL after a successful payment
    #[arg(long = "result-url")]
    pub result_url: String,

    /// Redirect URL after a failed payment
    #[arg(long = "fail-url")]
    pub fail_url: String,

    /// Payment method identifier (overrides config)
    #[arg(long = "payment-method")]
    pub payment_method: Option<String>,

    /// Checkout page language (overrides config)
    #[arg(long, value_enum)]
    pub language: Option<LanguageArg>,

    /// Invoice metadata as a JSON object
    #[arg(long)]
    pub metadata: Option<String>,
}

/// Arguments for the `sign` subcommand.
#[derive(Debug, Args)]
pub struct SignArgs {
    /// Merchant order identifier
    #[arg(long = "order-id")]
    pub order_id: String,

    /// Order amount exactly as sent
    #[arg(long)]
    pub amount: String,

    /// ISO currency code
    #[arg(long)]
    pub currency: String,

    /// Received signature to check instead of printing a new one
    #[arg(long)]
    pub verify: Option<String>,
}

/// Checkout language argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    /// English checkout page
    #[value(name = "en")]
    En,
    /// Russian checkout page
    #[value(name = "ru")]
    Ru,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Self::En,
            LanguageArg::Ru => Self::Ru,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
