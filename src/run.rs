//! Command execution.
//!
//! One handler per subcommand. Each builds what it needs from the
//! validated configuration, performs at most one API call and prints the
//! result to stdout.

use std::fmt::Write as _;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use payop::config::{CheckoutArgs, Command, ConfigError, SignArgs, ValidatedConfig};
use payop::model::{CallbackResponse, Invoice, Order, Payer, RefundBody, RefundType};
use payop::{Payop, PayopError, callback, signature};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// A value the command needs is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The client rejected the input or the API call failed.
    #[error(transparent)]
    Client(#[from] PayopError),

    /// Failed to read the notification payload.
    #[error("Failed to read callback payload '{}': {source}", path.display())]
    CallbackRead {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// `--metadata` is not a JSON object.
    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),

    /// Failed to render a response as JSON.
    #[error("Failed to format output: {0}")]
    Output(#[source] serde_json::Error),

    /// `sign --verify` received a signature that does not match.
    #[error("Signature does not match")]
    SignatureMismatch,
}

impl RunError {
    /// Returns true if the failure is a configuration problem.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::InvalidMetadata(_))
    }
}

/// Executes a subcommand.
///
/// `init` is handled before configuration is loaded and is a no-op here.
///
/// # Errors
///
/// Returns an error if required configuration is missing, the input is
/// invalid, or the API call fails.
#[cfg(not(tarpaulin_include))]
pub async fn execute(command: Command, config: &ValidatedConfig) -> Result<(), RunError> {
    match command {
        Command::Init { .. } => Ok(()),
        Command::Checkout(args) => checkout(&args, config).await,
        Command::Methods => methods(config).await,
        Command::Transaction { id } => transaction(&id, config).await,
        Command::Refund { id, amount } => refund(&id, amount, config).await,
        Command::ParseCallback { file } => parse_callback(&file),
        Command::Sign(args) => sign(&args, config),
    }
}

#[cfg(not(tarpaulin_include))]
async fn checkout(args: &CheckoutArgs, config: &ValidatedConfig) -> Result<(), RunError> {
    config.require_secret_key()?;
    let invoice = build_invoice(args, config)?;
    let client = client(config, "checkout")?;

    let url = client.checkout(&invoice).await?;
    println!("{url}");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn methods(config: &ValidatedConfig) -> Result<(), RunError> {
    let methods = client(config, "methods")?.available_methods().await?;
    println!("{}", to_pretty_json(&methods)?);
    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn transaction(id: &str, config: &ValidatedConfig) -> Result<(), RunError> {
    let transaction = client(config, "transaction")?.transaction(id).await?;

    let status = transaction
        .status()
        .map_or_else(|| "unknown".to_string(), |s| format!("{s:?}"));
    println!("State: {} ({status})", transaction.state);
    println!("{}", to_pretty_json(&transaction)?);
    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn refund(
    id: &str,
    amount: Option<String>,
    config: &ValidatedConfig,
) -> Result<(), RunError> {
    let body = refund_body(id, amount)?;
    let response = client(config, "refund")?.refund(&body).await?;

    let status = response
        .status
        .map_or_else(|| "none".to_string(), |s| s.to_string());
    println!("Refund status: {status}");
    if let Some(data) = &response.data {
        println!("{}", to_pretty_json(data)?);
    }
    Ok(())
}

fn parse_callback(file: &Path) -> Result<(), RunError> {
    let raw = read_payload(file)?;
    let parsed = callback::parse_callback_str(&raw).map_err(PayopError::from)?;
    print!("{}", describe_callback(&parsed));
    Ok(())
}

fn sign(args: &SignArgs, config: &ValidatedConfig) -> Result<(), RunError> {
    let secret = config.require_secret_key()?;
    let expected = signature::sign(&args.order_id, &args.amount, &args.currency, secret);

    match args.verify.as_deref() {
        None => println!("{expected}"),
        Some(received) if signature::verify(&expected, received) => {
            println!("Signature valid");
        }
        Some(_) => return Err(RunError::SignatureMismatch),
    }
    Ok(())
}

/// Creates a client whose operation spans are parented to a span naming
/// the subcommand.
fn client(config: &ValidatedConfig, command: &'static str) -> Result<Payop, RunError> {
    let client_config = config
        .client_config()?
        .with_span(tracing::info_span!("cli", command));
    Ok(Payop::new(client_config)?)
}

/// Builds the invoice for `checkout`; CLI values override config defaults.
fn build_invoice(args: &CheckoutArgs, config: &ValidatedConfig) -> Result<Invoice, RunError> {
    let order = Order::new(
        args.order_id.as_str(),
        args.amount.as_str(),
        args.currency.as_str(),
        args.description.as_str(),
    );

    let mut payer = Payer::new(args.email.as_str());
    if let Some(name) = &args.name {
        payer = payer.with_name(name.as_str());
    }
    if let Some(phone) = &args.phone {
        payer = payer.with_phone(phone.as_str());
    }

    let payment_method = args
        .payment_method
        .as_deref()
        .unwrap_or(&config.payment_method);
    let language = args.language.map_or(config.language, Into::into);

    let mut invoice = Invoice::new(
        order,
        payer,
        args.result_url.as_str(),
        args.fail_url.as_str(),
        payment_method,
    )
    .with_language(language);

    if let Some(raw) = &args.metadata {
        invoice = invoice.with_metadata(parse_metadata(raw)?);
    }
    Ok(invoice)
}

fn parse_metadata(raw: &str) -> Result<serde_json::Map<String, serde_json::Value>, RunError> {
    match serde_json::from_str(raw) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err(RunError::InvalidMetadata(
            "expected a JSON object".to_string(),
        )),
        Err(e) => Err(RunError::InvalidMetadata(e.to_string())),
    }
}

/// A refund is partial when an amount is given, full otherwise.
fn refund_body(id: &str, amount: Option<String>) -> Result<RefundBody, PayopError> {
    let kind = if amount.is_some() {
        RefundType::Partial
    } else {
        RefundType::Full
    };
    Ok(RefundBody::new(id, kind, amount)?)
}

fn read_payload(file: &Path) -> Result<String, RunError> {
    let read_error = |source| RunError::CallbackRead {
        path: file.to_path_buf(),
        source,
    };

    if file == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(read_error)?;
        return Ok(raw);
    }
    std::fs::read_to_string(file).map_err(read_error)
}

/// Renders a validated notification as `key: value` lines.
fn describe_callback(parsed: &CallbackResponse) -> String {
    let tx = &parsed.transaction;
    let status = tx
        .status()
        .map_or_else(|| "unknown".to_string(), |s| format!("{s:?}"));

    let mut out = String::new();
    let _ = writeln!(out, "Invoice: {}", parsed.invoice.id);
    let _ = writeln!(out, "Invoice txid: {}", parsed.invoice.txid);
    let _ = writeln!(out, "Transaction: {}", tx.id);
    let _ = writeln!(out, "State: {} ({status})", tx.state);
    let _ = writeln!(out, "Order: {}", tx.order.id);
    if let Some(error) = tx.error.as_ref().filter(|e| !e.message.is_empty()) {
        let _ = writeln!(out, "Error: {} ({})", error.message, error.code);
    }
    if let Some(metadata) = &parsed.invoice.metadata {
        let _ = writeln!(out, "Metadata: {metadata}");
    }
    out
}

fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, RunError> {
    serde_json::to_string_pretty(value).map_err(RunError::Output)
}
