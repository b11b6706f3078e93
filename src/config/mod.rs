//! Configuration layer for the `payop` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - `--config`, or `<config_dir>/payop/config.toml` if present
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! Credentials have no defaults. They are checked only by the commands that
//! use them: API commands need `token` and `public_key`, `checkout` and
//! `sign` also need `secret_key`, and `parse-callback` needs none.
//!
//! `payment_method` and `language` are TOML-only defaults; `checkout` can
//! override them per invocation.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{CheckoutArgs, Cli, Command, LanguageArg, SignArgs};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
