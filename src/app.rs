//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use std::path::PathBuf;

use payop::config::{ConfigError, defaults, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing credentials, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - network failure, API error, invalid payload, etc.
    ///
    /// A function because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. }
            if *f == field::TOKEN || *f == field::PUBLIC_KEY || *f == field::SECRET_KEY =>
        {
            eprintln!("\nRun 'payop init' to generate a configuration template.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'payop init' to generate a configuration template.");
        }
        ConfigError::AlreadyExists { .. } => {
            eprintln!("\nUse 'payop init --output <PATH>' to write elsewhere.");
        }
        _ => {}
    }
}

/// Resolves where `init` writes the template.
pub fn init_path(output: Option<PathBuf>) -> PathBuf {
    output
        .or_else(defaults::config_path)
        .unwrap_or_else(|| PathBuf::from(defaults::LOCAL_CONFIG_FILE))
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
